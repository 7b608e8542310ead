//! One-shot flash messages carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::FLASH_COOKIE_NAME;

/// Message shown once on the page after a redirect.
///
/// Only the key travels in the cookie; the text stays server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    AccountCreated,
    BookCreated,
    BookUpdated,
    AuthorCreated,
    GenreCreated,
    BookFavorited,
    BookUnfavorited,
}

impl Flash {
    const ALL: [Flash; 7] = [
        Flash::AccountCreated,
        Flash::BookCreated,
        Flash::BookUpdated,
        Flash::AuthorCreated,
        Flash::GenreCreated,
        Flash::BookFavorited,
        Flash::BookUnfavorited,
    ];

    fn key(self) -> &'static str {
        match self {
            Flash::AccountCreated => "account_created",
            Flash::BookCreated => "book_created",
            Flash::BookUpdated => "book_updated",
            Flash::AuthorCreated => "author_created",
            Flash::GenreCreated => "genre_created",
            Flash::BookFavorited => "book_favorited",
            Flash::BookUnfavorited => "book_unfavorited",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flash| flash.key() == key)
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::AccountCreated => "Account Created.",
            Flash::BookCreated => "New book was created successfully.",
            Flash::BookUpdated => "Book was updated successfully.",
            Flash::AuthorCreated => "New author was created successfully.",
            Flash::GenreCreated => "New genre was created successfully.",
            Flash::BookFavorited => "Book added to your favorites.",
            Flash::BookUnfavorited => "Book removed from your favorites.",
        }
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE_NAME, self.key()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Cookie that clears a shown flash
    pub fn removal() -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE_NAME).path("/").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_resolve() {
        for flash in Flash::ALL {
            assert_eq!(Flash::from_key(flash.key()), Some(flash));
        }
        assert_eq!(Flash::from_key("<script>"), None);
    }

    #[test]
    fn test_cookie_carries_key() {
        let cookie = Flash::AccountCreated.cookie();
        assert_eq!(cookie.name(), "flash");
        assert_eq!(cookie.value(), "account_created");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(Flash::AccountCreated.message(), "Account Created.");
    }
}
