//! Homepage, book and catalog form pages.

use axum::response::Html;
use std::fmt::Write;

use super::{escape, layout, options, Page};
use crate::domain::{Audience, Author, Book, Genre, User};

/// Extra data for logged-in visitors on a book page
#[derive(Debug, Clone)]
pub struct BookEditor {
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
    pub is_favorite: bool,
}

pub fn home_page(page: &Page<'_>, books: &[Book], users: &[User]) -> Html<String> {
    let mut body = String::from("<h1>All Books</h1>\n<ul class=\"books\">\n");
    for book in books {
        let _ = writeln!(
            body,
            "<li><a href=\"/book/{}\">{}</a> by {}</li>",
            book.id,
            escape(&book.title),
            escape(&book.author.name)
        );
    }
    body.push_str("</ul>\n<h2>All Users</h2>\n<ul class=\"users\">\n");
    for user in users {
        let _ = writeln!(
            body,
            "<li><a href=\"/profile/{}\">{}</a></li>",
            urlencoding::encode(&user.username),
            escape(&user.username)
        );
    }
    body.push_str("</ul>");

    layout(page, "Home", &body)
}

pub fn book_detail_page(page: &Page<'_>, book: &Book, editor: Option<&BookEditor>) -> Html<String> {
    let genres = book
        .genres
        .iter()
        .map(|g| escape(&g.name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut body = format!(
        "<h1>{}</h1>\n\
         <p><strong>Author:</strong> {}</p>\n\
         <p><strong>Published:</strong> {}</p>\n\
         <p><strong>Audience:</strong> {}</p>\n\
         <p><strong>Genres:</strong> {}</p>\n",
        escape(&book.title),
        escape(&book.author.name),
        escape(&book.publish_date_display()),
        book.audience.label(),
        genres
    );

    if let Some(editor) = editor {
        let (action, label) = if editor.is_favorite {
            ("unfavorite", "Unfavorite")
        } else {
            ("favorite", "Favorite")
        };
        let _ = writeln!(
            body,
            "<form action=\"/{}/{}\" method=\"post\"><button type=\"submit\">{}</button></form>",
            action, book.id, label
        );

        body.push_str("<h2>Edit Book</h2>\n");
        body.push_str(&book_form(
            &format!("/book/{}", book.id),
            Some(book),
            &editor.authors,
            &editor.genres,
        ));
    }

    layout(page, &book.title, &body)
}

pub fn create_book_page(page: &Page<'_>, authors: &[Author], genres: &[Genre]) -> Html<String> {
    let body = format!(
        "<h1>Create Book</h1>\n{}",
        book_form("/create_book", None, authors, genres)
    );
    layout(page, "Create Book", &body)
}

pub fn create_author_page(page: &Page<'_>) -> Html<String> {
    let body = "<h1>Create Author</h1>\n\
        <form action=\"/create_author\" method=\"post\">\n\
        <label>Name <input type=\"text\" name=\"name\" required></label>\n\
        <label>Biography <textarea name=\"biography\"></textarea></label>\n\
        <button type=\"submit\">Submit</button>\n\
        </form>";
    layout(page, "Create Author", body)
}

pub fn create_genre_page(page: &Page<'_>) -> Html<String> {
    let body = "<h1>Create Genre</h1>\n\
        <form action=\"/create_genre\" method=\"post\">\n\
        <label>Name <input type=\"text\" name=\"name\" required></label>\n\
        <button type=\"submit\">Submit</button>\n\
        </form>";
    layout(page, "Create Genre", body)
}

/// Book fields, pre-filled from `book` when editing
fn book_form(action: &str, book: Option<&Book>, authors: &[Author], genres: &[Genre]) -> String {
    let title = book.map(|b| b.title.as_str()).unwrap_or_default();
    let publish_date = book.map(Book::publish_date_display).unwrap_or_default();
    let author_id = book.map(|b| b.author.id.to_string());
    let audience = book.map(|b| b.audience).unwrap_or_default();

    let author_options = options(
        authors.iter().map(|a| (a.id.to_string(), a.name.as_str())),
        |value| author_id.as_deref() == Some(value),
    );
    let audience_options = options(
        Audience::VARIANTS
            .iter()
            .map(|a| (a.as_str().to_string(), a.label())),
        |value| value == audience.as_str(),
    );
    let genre_options = options(
        genres.iter().map(|g| (g.id.to_string(), g.name.as_str())),
        |value| {
            value
                .parse::<i32>()
                .map(|id| book.is_some_and(|b| b.has_genre(id)))
                .unwrap_or(false)
        },
    );

    format!(
        "<form action=\"{}\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{}\" required></label>\n\
         <label>Date Published <input type=\"date\" name=\"publish_date\" value=\"{}\"></label>\n\
         <label>Author <select name=\"author\">\n{}\n</select></label>\n\
         <label>Audience <select name=\"audience\">\n{}\n</select></label>\n\
         <label>Genres <select name=\"genres\" multiple>\n{}\n</select></label>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>",
        escape(action),
        escape(title),
        escape(&publish_date),
        author_options,
        audience_options,
        genre_options
    )
}
