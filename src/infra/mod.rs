//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the SeaORM entities
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AuthorRepository, AuthorStore, BookRepository, BookStore, GenreRepository, GenreStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};
