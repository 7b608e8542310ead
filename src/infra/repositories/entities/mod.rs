//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod author;
pub mod book;
pub mod book_genre;
pub mod favorite_book;
pub mod genre;
pub mod user;
