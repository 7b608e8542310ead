//! Catalog entities: books, authors and genres.

use chrono::NaiveDate;

use super::Audience;
use crate::config::DATE_FORMAT;

/// Book author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub biography: String,
}

/// Book genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Book with its author and genres resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub audience: Audience,
    pub author: Author,
    pub genres: Vec<Genre>,
}

impl Book {
    /// Publish date as `YYYY-MM-DD`, empty when unknown
    pub fn publish_date_display(&self) -> String {
        self.publish_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn has_genre(&self, genre_id: i32) -> bool {
        self.genres.iter().any(|g| g.id == genre_id)
    }
}

/// Fields submitted when creating or editing a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub author_id: i32,
    pub audience: Audience,
    pub genre_ids: Vec<i32>,
}

impl BookInput {
    /// Sort and de-duplicate genre ids so the genre set has no repeats.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.genre_ids.sort_unstable();
        self.genre_ids.dedup();
        self
    }
}
