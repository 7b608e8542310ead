//! Profile and favorites handlers.

use axum::{
    extract::{Path, State},
    response::{Html, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;

use super::redirect_with_flash;
use crate::api::middleware::{CurrentUser, Session};
use crate::api::{AppState, Flash};
use crate::errors::AppResult;
use crate::views;

/// Create profile and favorites routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/:username", get(profile))
        .route("/favorite/:id", post(favorite_book))
        .route("/unfavorite/:id", post(unfavorite_book))
}

/// Public profile with the user's favorite books
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    session: Session,
) -> AppResult<Html<String>> {
    let profile = state.user_service.get_profile(&username).await?;
    Ok(views::profile_page(&session.page(), &profile))
}

pub async fn favorite_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    user: CurrentUser,
    jar: CookieJar,
) -> AppResult<Response> {
    let book = state.user_service.favorite_book(user.id, id).await?;

    Ok(redirect_with_flash(
        jar,
        &format!("/book/{}", book.id),
        Flash::BookFavorited,
    ))
}

pub async fn unfavorite_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    user: CurrentUser,
    jar: CookieJar,
) -> AppResult<Response> {
    let book = state.user_service.unfavorite_book(user.id, id).await?;

    Ok(redirect_with_flash(
        jar,
        &format!("/book/{}", book.id),
        Flash::BookUnfavorited,
    ))
}
