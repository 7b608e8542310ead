//! Shared fixtures for service unit tests.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Audience, Author, Book, Password, User};
use crate::infra::repositories::{
    AuthorRepository, BookRepository, GenreRepository, MockAuthorRepository, MockBookRepository,
    MockGenreRepository, MockUserRepository, UserRepository,
};
use crate::infra::UnitOfWork;

/// Unit of work backed by mock repositories.
pub struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    books: Arc<MockBookRepository>,
    authors: Arc<MockAuthorRepository>,
    genres: Arc<MockGenreRepository>,
}

impl TestUnitOfWork {
    pub fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            books: Arc::new(MockBookRepository::new()),
            authors: Arc::new(MockAuthorRepository::new()),
            genres: Arc::new(MockGenreRepository::new()),
        }
    }

    pub fn with_users(mut self, users: MockUserRepository) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub fn with_books(mut self, books: MockBookRepository) -> Self {
        self.books = Arc::new(books);
        self
    }

    pub fn with_authors(mut self, authors: MockAuthorRepository) -> Self {
        self.authors = Arc::new(authors);
        self
    }

    pub fn with_genres(mut self, genres: MockGenreRepository) -> Self {
        self.genres = Arc::new(genres);
        self
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.books.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorRepository> {
        self.authors.clone()
    }

    fn genres(&self) -> Arc<dyn GenreRepository> {
        self.genres.clone()
    }
}

pub fn test_config() -> Config {
    Config::new("sqlite::memory:", "test-session-secret-that-is-long-enough")
}

pub fn test_user(id: i32, username: &str, password: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: Password::new(password)
            .expect("valid test password")
            .into_string(),
        created_at: Utc::now(),
    }
}

pub fn test_author(id: i32, name: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        biography: String::new(),
    }
}

pub fn test_book(id: i32, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        publish_date: NaiveDate::from_ymd_opt(1960, 7, 11),
        audience: Audience::All,
        author: test_author(1, "Harper Lee"),
        genres: vec![],
    }
}
