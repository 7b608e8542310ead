//! Catalog service - Books, authors and genres.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Author, Book, BookInput, Genre};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all books
    async fn list_books(&self) -> AppResult<Vec<Book>>;

    /// Get a book by ID
    async fn get_book(&self, id: i32) -> AppResult<Book>;

    async fn find_book_by_title(&self, title: &str) -> AppResult<Option<Book>>;

    /// Create a book after checking its author and genres exist
    async fn create_book(&self, input: BookInput) -> AppResult<Book>;

    /// Update a book after checking its author and genres exist
    async fn update_book(&self, id: i32, input: BookInput) -> AppResult<Book>;

    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    async fn find_author_by_name(&self, name: &str) -> AppResult<Option<Author>>;

    async fn create_author(&self, name: String, biography: String) -> AppResult<Author>;

    async fn list_genres(&self) -> AppResult<Vec<Genre>>;

    async fn find_genre_by_name(&self, name: &str) -> AppResult<Option<Genre>>;

    /// Create a genre. Genre names are unique.
    async fn create_genre(&self, name: String) -> AppResult<Genre>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    /// Create new catalog service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Reject references to authors or genres that do not exist.
    async fn check_references(&self, input: &BookInput) -> AppResult<()> {
        if self.uow.authors().find_by_id(input.author_id).await?.is_none() {
            return Err(AppError::validation("Not a valid choice for author"));
        }

        let genres = self.uow.genres().find_by_ids(input.genre_ids.clone()).await?;
        if genres.len() != input.genre_ids.len() {
            return Err(AppError::validation("Not a valid choice for genres"));
        }

        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.uow.books().list().await
    }

    async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.uow.books().find_by_id(id).await?.ok_or_not_found()
    }

    async fn find_book_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        self.uow.books().find_by_title(title).await
    }

    async fn create_book(&self, input: BookInput) -> AppResult<Book> {
        let input = input.normalized();
        self.check_references(&input).await?;

        let book = self.uow.books().create(input).await?;
        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    async fn update_book(&self, id: i32, input: BookInput) -> AppResult<Book> {
        let input = input.normalized();
        self.check_references(&input).await?;

        let book = self.uow.books().update(id, input).await?;
        tracing::info!(book_id = book.id, "Book updated");
        Ok(book)
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.uow.authors().list().await
    }

    async fn find_author_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        self.uow.authors().find_by_name(name).await
    }

    async fn create_author(&self, name: String, biography: String) -> AppResult<Author> {
        let author = self
            .uow
            .authors()
            .create(name.trim().to_string(), biography.trim().to_string())
            .await?;

        tracing::info!(author_id = author.id, name = %author.name, "Author created");
        Ok(author)
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.uow.genres().list().await
    }

    async fn find_genre_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        self.uow.genres().find_by_name(name).await
    }

    async fn create_genre(&self, name: String) -> AppResult<Genre> {
        let name = name.trim().to_string();

        if self.uow.genres().find_by_name(&name).await?.is_some() {
            return Err(AppError::conflict("Genre"));
        }

        let genre = self.uow.genres().create(name).await?;
        tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
        Ok(genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Audience;
    use crate::infra::repositories::{MockAuthorRepository, MockBookRepository, MockGenreRepository};
    use crate::services::test_support::{test_author, test_book, TestUnitOfWork};

    fn watchman_input(genre_ids: Vec<i32>) -> BookInput {
        BookInput {
            title: "Go Set a Watchman".to_string(),
            publish_date: chrono::NaiveDate::from_ymd_opt(2015, 7, 14),
            author_id: 1,
            audience: Audience::Adult,
            genre_ids,
        }
    }

    fn known_author() -> MockAuthorRepository {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_find_by_id()
            .returning(|id| Ok((id == 1).then(|| test_author(1, "Harper Lee"))));
        authors
    }

    #[tokio::test]
    async fn test_create_book_checks_references_then_saves() {
        let mut genres = MockGenreRepository::new();
        genres.expect_find_by_ids().returning(|_| Ok(vec![]));

        let mut books = MockBookRepository::new();
        books
            .expect_create()
            .withf(|input| input.title == "Go Set a Watchman" && input.author_id == 1)
            .returning(|input| Ok(test_book(3, &input.title)));

        let uow = TestUnitOfWork::new()
            .with_authors(known_author())
            .with_genres(genres)
            .with_books(books);
        let service = CatalogManager::new(Arc::new(uow));

        let book = service.create_book(watchman_input(vec![])).await.unwrap();
        assert_eq!(book.id, 3);
        assert_eq!(book.author.name, "Harper Lee");
    }

    #[tokio::test]
    async fn test_create_book_unknown_author() {
        let mut books = MockBookRepository::new();
        books.expect_create().never();

        let uow = TestUnitOfWork::new()
            .with_authors(known_author())
            .with_books(books);
        let service = CatalogManager::new(Arc::new(uow));

        let mut input = watchman_input(vec![]);
        input.author_id = 42;

        let result = service.create_book(input).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_book_unknown_genre() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_ids()
            .withf(|ids| ids == &vec![1, 2])
            .returning(|_| Ok(vec![Genre { id: 1, name: "Fiction".to_string() }]));

        let mut books = MockBookRepository::new();
        books.expect_update().never();

        let uow = TestUnitOfWork::new()
            .with_authors(known_author())
            .with_genres(genres)
            .with_books(books);
        let service = CatalogManager::new(Arc::new(uow));

        let result = service.update_book(1, watchman_input(vec![2, 1, 2])).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().returning(|_| Ok(None));

        let service = CatalogManager::new(Arc::new(TestUnitOfWork::new().with_books(books)));

        assert!(matches!(service.get_book(99).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_genre_duplicate() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_name()
            .withf(|name| name == "Romance")
            .returning(|name| Ok(Some(Genre { id: 1, name: name.to_string() })));
        genres.expect_create().never();

        let service = CatalogManager::new(Arc::new(TestUnitOfWork::new().with_genres(genres)));

        let result = service.create_genre(" Romance ".to_string()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_author_trims_fields() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_create()
            .withf(|name, biography| name == "Erich Fromm" && biography == "Psychologist")
            .returning(|name, biography| {
                Ok(Author {
                    id: 3,
                    name,
                    biography,
                })
            });

        let service = CatalogManager::new(Arc::new(TestUnitOfWork::new().with_authors(authors)));

        let author = service
            .create_author(" Erich Fromm".to_string(), "Psychologist\n".to_string())
            .await
            .unwrap();
        assert_eq!(author.name, "Erich Fromm");
    }
}
