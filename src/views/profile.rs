//! Public profile page with the user's favorite books.

use axum::response::Html;
use std::fmt::Write;

use super::{escape, layout, Page};
use crate::domain::Profile;

pub fn profile_page(page: &Page<'_>, profile: &Profile) -> Html<String> {
    let username = escape(&profile.user.username);
    let mut body = format!(
        "<h1>{}</h1>\n<p>Member since {}</p>\n<h2>Favorite Books</h2>\n",
        username,
        profile.user.created_at.format("%Y-%m-%d")
    );

    if profile.favorite_books.is_empty() {
        body.push_str("<p>No favorite books yet.</p>");
    } else {
        body.push_str("<ul class=\"books\">\n");
        for book in &profile.favorite_books {
            let _ = writeln!(
                body,
                "<li><a href=\"/book/{}\">{}</a> by {}</li>",
                book.id,
                escape(&book.title),
                escape(&book.author.name)
            );
        }
        body.push_str("</ul>");
    }

    layout(page, &profile.user.username, &body)
}
