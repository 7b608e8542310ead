//! Signup and login pages.

use axum::response::Html;

use super::{escape, layout, Page};
use crate::config::NEXT_QUERY_PARAM;

pub fn signup_page(page: &Page<'_>, error: Option<&str>, username: &str) -> Html<String> {
    let body = credentials_form("Sign Up", "/signup", error, username);
    layout(page, "Sign Up", &body)
}

/// Login page; `next` is carried through to the form action
pub fn login_page(
    page: &Page<'_>,
    error: Option<&str>,
    username: &str,
    next: Option<&str>,
) -> Html<String> {
    let action = match next {
        Some(next) => format!("/login?{}={}", NEXT_QUERY_PARAM, urlencoding::encode(next)),
        None => "/login".to_string(),
    };

    let body = credentials_form("Log In", &action, error, username);
    layout(page, "Log In", &body)
}

fn credentials_form(heading: &str, action: &str, error: Option<&str>, username: &str) -> String {
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>\n", escape(message)))
        .unwrap_or_default();

    format!(
        "<h1>{heading}</h1>\n{error}\
         <form action=\"{action}\" method=\"post\">\n\
         <label>Username <input type=\"text\" name=\"username\" value=\"{username}\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">{heading}</button>\n\
         </form>",
        heading = heading,
        error = error,
        action = escape(action),
        username = escape(username),
    )
}
