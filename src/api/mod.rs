//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Session middleware and flash messages
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use flash::Flash;
pub use routes::create_router;
pub use state::AppState;
