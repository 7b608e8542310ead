//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories over one shared connection pool.
//! Multi-table writes (books and their genre links) open their own
//! transaction inside the repository.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    AuthorRepository, AuthorStore, BookRepository, BookStore, GenreRepository, GenreStore,
    UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get book repository
    fn books(&self) -> Arc<dyn BookRepository>;

    /// Get author repository
    fn authors(&self) -> Arc<dyn AuthorRepository>;

    /// Get genre repository
    fn genres(&self) -> Arc<dyn GenreRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    book_repo: Arc<BookStore>,
    author_repo: Arc<AuthorStore>,
    genre_repo: Arc<GenreStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            book_repo: Arc::new(BookStore::new(db.clone())),
            author_repo: Arc::new(AuthorStore::new(db.clone())),
            genre_repo: Arc::new(GenreStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.book_repo.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorRepository> {
        self.author_repo.clone()
    }

    fn genres(&self) -> Arc<dyn GenreRepository> {
        self.genre_repo.clone()
    }
}
