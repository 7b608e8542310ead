//! User repository implementation, including the favorites association.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::book_repository::assemble_books;
use super::entities::favorite_book::{self, Entity as FavoriteBookEntity};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Book, User};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, username: String, password_hash: String) -> AppResult<User>;

    /// List all users ordered by username
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Favorite books of a user, oldest favorite first
    async fn favorite_books(&self, user_id: i32) -> AppResult<Vec<Book>>;

    /// Whether the user has favorited the book
    async fn is_favorite(&self, user_id: i32, book_id: i32) -> AppResult<bool>;

    /// Add a book to the user's favorites (no-op if already present)
    async fn add_favorite(&self, user_id: i32, book_id: i32) -> AppResult<()>;

    /// Remove a book from the user's favorites (no-op if absent)
    async fn remove_favorite(&self, user_id: i32, book_id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_favorite(
        &self,
        user_id: i32,
        book_id: i32,
    ) -> AppResult<Option<favorite_book::Model>> {
        FavoriteBookEntity::find_by_id((user_id, book_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, username: String, password_hash: String) -> AppResult<User> {
        let active_model = ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::UsernameTaken,
                _ => AppError::from(e),
            }
        })?;

        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Username)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn favorite_books(&self, user_id: i32) -> AppResult<Vec<Book>> {
        let rows = FavoriteBookEntity::find()
            .filter(favorite_book::Column::UserId.eq(user_id))
            .order_by_asc(favorite_book::Column::FavoritedAt)
            .find_also_related(super::entities::book::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let books = rows.into_iter().filter_map(|(_, book)| book).collect();
        assemble_books(&self.db, books).await
    }

    async fn is_favorite(&self, user_id: i32, book_id: i32) -> AppResult<bool> {
        Ok(self.find_favorite(user_id, book_id).await?.is_some())
    }

    async fn add_favorite(&self, user_id: i32, book_id: i32) -> AppResult<()> {
        let inserted = favorite_book::ActiveModel {
            user_id: Set(user_id),
            book_id: Set(book_id),
            favorited_at: Set(chrono::Utc::now()),
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                // Already a favorite; keep the original timestamp.
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(()),
                _ => Err(AppError::from(e)),
            },
        }
    }

    async fn remove_favorite(&self, user_id: i32, book_id: i32) -> AppResult<()> {
        if let Some(favorite) = self.find_favorite(user_id, book_id).await? {
            favorite.delete(&self.db).await.map_err(AppError::from)?;
        }

        Ok(())
    }
}
