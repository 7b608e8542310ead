//! books-app - A book catalog web application
//!
//! Visitors browse books, authors and genres; registered users create
//! catalog entries, edit books and keep a list of favorite books.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, session middleware, and routes
//! - **views**: Server-rendered HTML pages
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod views;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Audience, Author, Book, Genre, Password, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
