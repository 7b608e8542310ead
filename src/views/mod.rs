//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`], which draws the navigation for the
//! current visitor and any pending flash message. All user-supplied text is
//! passed through [`escape`].

mod auth;
mod catalog;
mod profile;

use axum::{http::StatusCode, response::Html};
use std::fmt::Write;

pub use auth::{login_page, signup_page};
pub use catalog::{
    book_detail_page, create_author_page, create_book_page, create_genre_page, home_page,
    BookEditor,
};
pub use profile::profile_page;

/// Per-visitor layout data
#[derive(Debug, Clone, Copy, Default)]
pub struct Page<'a> {
    /// Logged-in username, if any
    pub username: Option<&'a str>,
    pub flash: Option<&'a str>,
}

/// Escape text for HTML element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(page: &Page<'_>) -> String {
    let mut links = vec![r#"<a href="/">Home</a>"#.to_string()];

    match page.username {
        Some(username) => {
            links.push(r#"<a href="/create_book">Create Book</a>"#.to_string());
            links.push(r#"<a href="/create_author">Create Author</a>"#.to_string());
            links.push(r#"<a href="/create_genre">Create Genre</a>"#.to_string());
            links.push(format!(
                r#"<a href="/profile/{}">{}</a>"#,
                urlencoding::encode(username),
                escape(username)
            ));
            links.push(
                r#"<form class="inline" action="/logout" method="post"><button type="submit">Log Out</button></form>"#
                    .to_string(),
            );
        }
        None => {
            links.push(r#"<a href="/login">Log In</a>"#.to_string());
            links.push(r#"<a href="/signup">Sign Up</a>"#.to_string());
        }
    }

    format!("<nav>{}</nav>", links.join(" | "))
}

fn document(title: &str, header: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{} | Books</title>\n</head>\n<body>\n{}\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        header,
        body
    )
}

/// Wrap page content in the shared document shell
pub(crate) fn layout(page: &Page<'_>, title: &str, body: &str) -> Html<String> {
    let mut header = nav(page);
    if let Some(message) = page.flash {
        let _ = write!(header, "\n<p class=\"flash\">{}</p>", escape(message));
    }

    Html(document(title, &header, body))
}

/// Error page rendered for failed requests.
///
/// Rendered without visitor context, so it carries no navigation.
pub fn error_page(status: StatusCode, code: &str, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {}</h1>\n<p class=\"error\" data-code=\"{}\">{}</p>\n<p><a href=\"/\">Back to the homepage</a></p>",
        status.as_u16(),
        escape(reason),
        escape(code),
        escape(message)
    );

    Html(document(reason, "", &body))
}

/// `<option>` list; `selected` marks the chosen values
pub(crate) fn options<'a, I>(items: I, selected: impl Fn(&str) -> bool) -> String
where
    I: IntoIterator<Item = (String, &'a str)>,
{
    items
        .into_iter()
        .map(|(value, label)| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape(&value),
                if selected(&value) { " selected" } else { "" },
                escape(label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape("Harper Lee"), "Harper Lee");
    }

    #[test]
    fn test_anonymous_nav() {
        let Html(html) = layout(&Page::default(), "Home", "<p>hi</p>");

        assert!(html.contains("Log In"));
        assert!(html.contains("Sign Up"));
        assert!(!html.contains("Create Book"));
        assert!(!html.contains("Log Out"));
    }

    #[test]
    fn test_logged_in_nav_and_flash() {
        let page = Page {
            username: Some("me1"),
            flash: Some("Book was updated successfully."),
        };
        let Html(html) = layout(&page, "Home", "");

        assert!(html.contains("Create Book"));
        assert!(html.contains("Create Author"));
        assert!(html.contains("Create Genre"));
        assert!(html.contains(r#"href="/profile/me1""#));
        assert!(html.contains("Book was updated successfully."));
        assert!(!html.contains("Log In"));
        assert!(!html.contains("Sign Up"));
    }

    #[test]
    fn test_error_page() {
        let Html(html) = error_page(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");

        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Resource not found"));
        assert!(html.contains("NOT_FOUND"));
    }

    #[test]
    fn test_options_marks_selected() {
        let html = options(
            vec![("1".to_string(), "Harper Lee"), ("2".to_string(), "Sylvia Plath")],
            |value| value == "2",
        );

        assert!(html.contains(r#"<option value="1">Harper Lee</option>"#));
        assert!(html.contains(r#"<option value="2" selected>Sylvia Plath</option>"#));
    }
}
