//! Signup, login and logout handlers.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use validator::Validate;

use super::{redirect, redirect_with_flash};
use crate::api::extractors::ValidatedForm;
use crate::api::middleware::{session_cookie, session_removal, Session};
use crate::api::{AppState, Flash};
use crate::config::LOGIN_PATH;
use crate::errors::AppResult;
use crate::views;

/// Signup form
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    pub password: String,
}

/// Where to go after logging in
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout).post(logout))
}

pub async fn signup_form(session: Session) -> Html<String> {
    views::signup_page(&session.page(), None, "")
}

/// Create an account, then send the visitor to the login page
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<SignupForm>,
) -> AppResult<Response> {
    match state
        .auth_service
        .signup(form.username.clone(), form.password)
        .await
    {
        Ok(_) => Ok(redirect_with_flash(jar, LOGIN_PATH, Flash::AccountCreated)),
        Err(e) if e.is_form_error() => {
            let message = e.to_string();
            Ok(views::signup_page(&session.page(), Some(&message), &form.username).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn login_form(session: Session, Query(query): Query<NextQuery>) -> Html<String> {
    views::login_page(&session.page(), None, "", query.next.as_deref())
}

/// Check credentials and start a session
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    session: Session,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Response> {
    match state.auth_service.login(&form.username, &form.password).await {
        Ok(user) => {
            let token = state.auth_service.issue_session(&user)?;
            let target = local_target(query.next.as_deref());
            Ok((jar.add(session_cookie(token)), redirect(target)).into_response())
        }
        Err(e) if e.is_form_error() => {
            let message = e.to_string();
            Ok(views::login_page(
                &session.page(),
                Some(&message),
                &form.username,
                query.next.as_deref(),
            )
            .into_response())
        }
        Err(e) => Err(e),
    }
}

/// End the session
pub async fn logout(jar: CookieJar) -> Response {
    (jar.remove(session_removal()), redirect("/")).into_response()
}

/// Only same-site paths are followed; anything else lands on the homepage.
fn local_target(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => {
            path
        }
        _ => "/",
    }
}
