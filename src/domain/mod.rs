//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! catalog and account concepts independent of infrastructure concerns.

pub mod audience;
pub mod book;
pub mod password;
pub mod user;

pub use audience::Audience;
pub use book::{Author, Book, BookInput, Genre};
pub use password::Password;
pub use user::{Profile, User};
