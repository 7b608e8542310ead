//! Homepage and book handlers.

use axum::{
    extract::{Path, State},
    response::{Html, Response},
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use super::redirect_with_flash;
use crate::api::extractors::ValidatedForm;
use crate::api::middleware::{CurrentUser, Session};
use crate::api::{AppState, Flash};
use crate::config::DATE_FORMAT;
use crate::domain::{Audience, BookInput};
use crate::errors::{AppError, AppResult};
use crate::services::parallel;
use crate::views::{self, BookEditor};

/// Book create/edit form
#[derive(Debug, Deserialize, Validate)]
pub struct BookForm {
    #[validate(length(min = 3, max = 80, message = "Title must be between 3 and 80 characters"))]
    pub title: String,
    #[serde(default)]
    pub publish_date: String,
    pub author: i32,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub genres: Vec<i32>,
}

impl BookForm {
    /// Parse the raw fields into a catalog input
    pub fn into_input(self) -> AppResult<BookInput> {
        let publish_date = match self.publish_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .map_err(|_| AppError::validation("Not a valid date value"))?,
            ),
        };

        let audience = match self.audience.as_deref().map(str::trim) {
            None | Some("") => Audience::default(),
            Some(raw) => raw.parse()?,
        };

        Ok(BookInput {
            title: self.title,
            publish_date,
            author_id: self.author,
            audience,
            genre_ids: self.genres,
        })
    }
}

/// Create homepage and book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/book/:id", get(book_detail).post(update_book))
        .route("/create_book", get(create_book_form).post(create_book))
}

/// All books and all users
pub async fn homepage(State(state): State<AppState>, session: Session) -> AppResult<Html<String>> {
    let (books, users) = parallel::join2(
        state.catalog_service.list_books(),
        state.user_service.list_users(),
    )
    .await?;

    Ok(views::home_page(&session.page(), &books, &users))
}

/// Book details; logged-in visitors also get the favorite control and edit form
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> AppResult<Html<String>> {
    let book = state.catalog_service.get_book(id).await?;

    let editor = match &session.user {
        Some(user) => {
            let (authors, genres, is_favorite) = parallel::join3(
                state.catalog_service.list_authors(),
                state.catalog_service.list_genres(),
                state.user_service.is_favorite(user.id, book.id),
            )
            .await?;

            Some(BookEditor {
                authors,
                genres,
                is_favorite,
            })
        }
        None => None,
    };

    Ok(views::book_detail_page(&session.page(), &book, editor.as_ref()))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    user: CurrentUser,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<BookForm>,
) -> AppResult<Response> {
    let book = state.catalog_service.update_book(id, form.into_input()?).await?;
    tracing::debug!(book_id = book.id, user_id = user.id, "Book edited");

    Ok(redirect_with_flash(
        jar,
        &format!("/book/{}", book.id),
        Flash::BookUpdated,
    ))
}

pub async fn create_book_form(
    State(state): State<AppState>,
    _user: CurrentUser,
    session: Session,
) -> AppResult<Html<String>> {
    let (authors, genres) = parallel::join2(
        state.catalog_service.list_authors(),
        state.catalog_service.list_genres(),
    )
    .await?;

    Ok(views::create_book_page(&session.page(), &authors, &genres))
}

pub async fn create_book(
    State(state): State<AppState>,
    _user: CurrentUser,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<BookForm>,
) -> AppResult<Response> {
    let book = state.catalog_service.create_book(form.into_input()?).await?;

    Ok(redirect_with_flash(
        jar,
        &format!("/book/{}", book.id),
        Flash::BookCreated,
    ))
}
