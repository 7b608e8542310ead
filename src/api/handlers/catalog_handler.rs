//! Author and genre handlers.

use axum::{
    extract::State,
    response::{Html, Response},
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use validator::Validate;

use super::redirect_with_flash;
use crate::api::extractors::ValidatedForm;
use crate::api::middleware::{CurrentUser, Session};
use crate::api::{AppState, Flash};
use crate::errors::AppResult;
use crate::views;

#[derive(Debug, Deserialize, Validate)]
pub struct AuthorForm {
    #[validate(length(min = 3, max = 80, message = "Name must be between 3 and 80 characters"))]
    pub name: String,
    #[serde(default)]
    pub biography: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenreForm {
    #[validate(length(min = 3, max = 80, message = "Name must be between 3 and 80 characters"))]
    pub name: String,
}

/// Create author and genre routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/create_author", get(create_author_form).post(create_author))
        .route("/create_genre", get(create_genre_form).post(create_genre))
}

pub async fn create_author_form(_user: CurrentUser, session: Session) -> Html<String> {
    views::create_author_page(&session.page())
}

pub async fn create_author(
    State(state): State<AppState>,
    _user: CurrentUser,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<AuthorForm>,
) -> AppResult<Response> {
    state
        .catalog_service
        .create_author(form.name, form.biography)
        .await?;

    Ok(redirect_with_flash(jar, "/", Flash::AuthorCreated))
}

pub async fn create_genre_form(_user: CurrentUser, session: Session) -> Html<String> {
    views::create_genre_page(&session.page())
}

pub async fn create_genre(
    State(state): State<AppState>,
    _user: CurrentUser,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<GenreForm>,
) -> AppResult<Response> {
    state.catalog_service.create_genre(form.name).await?;

    Ok(redirect_with_flash(jar, "/", Flash::GenreCreated))
}
