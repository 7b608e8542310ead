//! Cookie session middleware and the extractors built on it.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;

use crate::api::handlers::redirect;
use crate::api::{AppState, Flash};
use crate::config::{FLASH_COOKIE_NAME, LOGIN_PATH, NEXT_QUERY_PARAM, SESSION_COOKIE_NAME};
use crate::views::Page;

/// Logged-in user extracted from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
}

/// Per-request session state: the visitor and any pending flash message.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub user: Option<CurrentUser>,
    pub flash: Option<Flash>,
}

impl Session {
    /// Layout data for rendering a page for this visitor
    pub fn page(&self) -> Page<'_> {
        Page {
            username: self.user.as_ref().map(|u| u.username.as_str()),
            flash: self.flash.map(Flash::message),
        }
    }
}

/// Session middleware.
///
/// Decodes the session and flash cookies into a `Session` request
/// extension. A tampered or expired session counts as anonymous. Once a
/// successful page has rendered the flash, its cookie is cleared.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let user = jar.get(SESSION_COOKIE_NAME).and_then(|cookie| {
        match state.auth_service.verify_session(cookie.value()) {
            Ok(claims) => Some(CurrentUser {
                id: claims.sub,
                username: claims.username,
            }),
            Err(e) => {
                tracing::debug!(error = ?e, "Ignoring invalid session cookie");
                None
            }
        }
    });

    let flash = jar
        .get(FLASH_COOKIE_NAME)
        .and_then(|cookie| Flash::from_key(cookie.value()));

    request.extensions_mut().insert(Session { user, flash });

    let response = next.run(request).await;

    if flash.is_some() && response.status().is_success() {
        return (jar.remove(Flash::removal()), response).into_response();
    }

    response
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Session>().cloned().unwrap_or_default())
    }
}

/// Requires a logged-in user; anyone else is sent to the login page with
/// the requested path in `next`.
#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts
            .extensions
            .get::<Session>()
            .and_then(|session| session.user.clone())
        {
            return Ok(user);
        }

        let target = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        Err(redirect(&format!(
            "{}?{}={}",
            LOGIN_PATH,
            NEXT_QUERY_PARAM,
            urlencoding::encode(target)
        )))
    }
}

/// HTTP-only session cookie holding a signed token
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn session_removal() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME).path("/").build()
}
