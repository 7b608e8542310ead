//! User service - Profiles and favorite books.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Book, Profile, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users by username
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Public profile page data for a username
    async fn get_profile(&self, username: &str) -> AppResult<Profile>;

    async fn is_favorite(&self, user_id: i32, book_id: i32) -> AppResult<bool>;

    /// Add a book to the user's favorites. Repeating is a no-op.
    async fn favorite_book(&self, user_id: i32, book_id: i32) -> AppResult<Book>;

    /// Remove a book from the user's favorites. Absent entries are ignored.
    async fn unfavorite_book(&self, user_id: i32, book_id: i32) -> AppResult<Book>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn load_book(&self, book_id: i32) -> AppResult<Book> {
        self.uow.books().find_by_id(book_id).await?.ok_or_not_found()
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn get_profile(&self, username: &str) -> AppResult<Profile> {
        let user = self
            .uow
            .users()
            .find_by_username(username)
            .await?
            .ok_or_not_found()?;

        let favorite_books = self.uow.users().favorite_books(user.id).await?;

        Ok(Profile {
            user,
            favorite_books,
        })
    }

    async fn is_favorite(&self, user_id: i32, book_id: i32) -> AppResult<bool> {
        self.uow.users().is_favorite(user_id, book_id).await
    }

    async fn favorite_book(&self, user_id: i32, book_id: i32) -> AppResult<Book> {
        let book = self.load_book(book_id).await?;
        self.get_user(user_id).await?;

        self.uow.users().add_favorite(user_id, book_id).await?;
        tracing::info!(user_id, book_id, "Book favorited");
        Ok(book)
    }

    async fn unfavorite_book(&self, user_id: i32, book_id: i32) -> AppResult<Book> {
        let book = self.load_book(book_id).await?;

        self.uow.users().remove_favorite(user_id, book_id).await?;
        tracing::info!(user_id, book_id, "Book unfavorited");
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::{MockBookRepository, MockUserRepository};
    use crate::services::test_support::{test_book, test_user, TestUnitOfWork};

    fn books_with(id: i32, title: &'static str) -> MockBookRepository {
        let mut books = MockBookRepository::new();
        books
            .expect_find_by_id()
            .returning(move |book_id| Ok((book_id == id).then(|| test_book(id, title))));
        books
    }

    #[tokio::test]
    async fn test_get_profile_includes_favorites() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username| username == "me1")
            .returning(|username| Ok(Some(test_user(1, username, "password"))));
        users
            .expect_favorite_books()
            .withf(|user_id| *user_id == 1)
            .returning(|_| Ok(vec![test_book(2, "The Bell Jar")]));

        let service = UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));

        let profile = service.get_profile("me1").await.unwrap();
        assert_eq!(profile.user.username, "me1");
        assert_eq!(profile.favorite_books.len(), 1);
        assert_eq!(profile.favorite_books[0].title, "The Bell Jar");
    }

    #[tokio::test]
    async fn test_get_profile_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));

        assert!(matches!(service.get_profile("nobody").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_favorite_book_adds_entry() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "me1", "password"))));
        users
            .expect_add_favorite()
            .withf(|user_id, book_id| *user_id == 1 && *book_id == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        let uow = TestUnitOfWork::new()
            .with_users(users)
            .with_books(books_with(2, "The Bell Jar"));
        let service = UserManager::new(Arc::new(uow));

        let book = service.favorite_book(1, 2).await.unwrap();
        assert_eq!(book.title, "The Bell Jar");
    }

    #[tokio::test]
    async fn test_favorite_missing_book() {
        let mut users = MockUserRepository::new();
        users.expect_add_favorite().never();

        let uow = TestUnitOfWork::new()
            .with_users(users)
            .with_books(books_with(2, "The Bell Jar"));
        let service = UserManager::new(Arc::new(uow));

        assert!(matches!(service.favorite_book(1, 9).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_unfavorite_book_removes_entry() {
        let mut users = MockUserRepository::new();
        users
            .expect_remove_favorite()
            .withf(|user_id, book_id| *user_id == 1 && *book_id == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        let uow = TestUnitOfWork::new()
            .with_users(users)
            .with_books(books_with(2, "The Bell Jar"));
        let service = UserManager::new(Arc::new(uow));

        service.unfavorite_book(1, 2).await.unwrap();
    }
}
