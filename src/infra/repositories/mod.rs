//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod author_repository;
mod book_repository;
pub(crate) mod entities;
mod genre_repository;
mod user_repository;

pub use author_repository::{AuthorRepository, AuthorStore};
pub use book_repository::{BookRepository, BookStore};
pub use genre_repository::{GenreRepository, GenreStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
