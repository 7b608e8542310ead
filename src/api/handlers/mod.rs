//! HTTP request handlers.

pub mod auth_handler;
pub mod book_handler;
pub mod catalog_handler;
pub mod user_handler;

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use super::Flash;

pub use auth_handler::auth_routes;
pub use book_handler::book_routes;
pub use catalog_handler::catalog_routes;
pub use user_handler::user_routes;

/// `302 Found` redirect to a local path
pub fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// Redirect and show `flash` on the next rendered page
pub fn redirect_with_flash(jar: CookieJar, location: &str, flash: Flash) -> Response {
    (jar.add(flash.cookie()), redirect(location)).into_response()
}
