//! API middleware.

mod auth;

pub use auth::{session_cookie, session_middleware, session_removal, CurrentUser, Session};
