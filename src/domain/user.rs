//! User domain entity and related types.

use chrono::{DateTime, Utc};

use super::{Book, Password};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Stored password hash as a verifiable value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.clone())
    }
}

/// Public profile: the user together with their favorite books
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub favorite_books: Vec<Book>,
}
