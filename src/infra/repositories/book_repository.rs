//! Book repository implementation.
//!
//! Books are always returned with their author and genres resolved.
//! Writes touch `books` and `book_genres` inside one transaction.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::entities::author::Entity as AuthorEntity;
use super::entities::book::{self, Entity as BookEntity};
use super::entities::book_genre::{self, Entity as BookGenreEntity};
use super::entities::genre::Entity as GenreEntity;
use crate::domain::{Audience, Book, BookInput, Genre};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Book repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>>;

    /// List all books in creation order
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Insert a book and its genre links. The author and genres must exist.
    async fn create(&self, input: BookInput) -> AppResult<Book>;

    /// Overwrite a book's fields and replace its genre set.
    async fn update(&self, id: i32, input: BookInput) -> AppResult<Book>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run `save_book` in a transaction, committing on success.
    async fn save(&self, existing: Option<book::Model>, input: BookInput) -> AppResult<i32> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match save_book(&txn, existing, input).await {
            Ok(book_id) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(book_id)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn load(&self, id: i32) -> AppResult<Book> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Book {} vanished after save", id)))
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let model = BookEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match model {
            Some(model) => Ok(assemble_books(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let model = BookEntity::find()
            .filter(book::Column::Title.eq(title))
            .order_by_asc(book::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match model {
            Some(model) => Ok(assemble_books(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        assemble_books(&self.db, models).await
    }

    async fn create(&self, input: BookInput) -> AppResult<Book> {
        let book_id = self.save(None, input).await?;
        tracing::debug!(book_id, "Book created");
        self.load(book_id).await
    }

    async fn update(&self, id: i32, input: BookInput) -> AppResult<Book> {
        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let book_id = self.save(Some(existing), input).await?;
        tracing::debug!(book_id, "Book updated");
        self.load(book_id).await
    }
}

/// Write the book row and its genre links, returning the book id.
async fn save_book(
    txn: &DatabaseTransaction,
    existing: Option<book::Model>,
    input: BookInput,
) -> AppResult<i32> {
    let is_new = existing.is_none();
    let mut active: book::ActiveModel = match existing {
        Some(model) => model.into(),
        None => <book::ActiveModel as Default>::default(),
    };

    active.title = Set(input.title);
    active.publish_date = Set(input.publish_date);
    active.author_id = Set(input.author_id);
    active.audience = Set(input.audience.to_string());

    let model = if is_new {
        active.insert(txn).await?
    } else {
        active.update(txn).await?
    };

    BookGenreEntity::delete_many()
        .filter(book_genre::Column::BookId.eq(model.id))
        .exec(txn)
        .await?;

    if !input.genre_ids.is_empty() {
        let links = input.genre_ids.into_iter().map(|genre_id| book_genre::ActiveModel {
            book_id: Set(model.id),
            genre_id: Set(genre_id),
        });
        BookGenreEntity::insert_many(links)
            .exec_without_returning(txn)
            .await?;
    }

    Ok(model.id)
}

/// Resolve authors and genres for a batch of book rows, keeping their order.
pub(crate) async fn assemble_books<C>(db: &C, models: Vec<book::Model>) -> AppResult<Vec<Book>>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let authors = models.load_one(AuthorEntity, db).await?;
    let genres = models
        .load_many_to_many(GenreEntity, BookGenreEntity, db)
        .await?;

    models
        .into_iter()
        .zip(authors)
        .zip(genres)
        .map(|((model, author), genres)| {
            let author = author.ok_or_else(|| {
                AppError::internal(format!("Book {} references a missing author", model.id))
            })?;

            let audience = model.audience.parse().unwrap_or_else(|_| {
                tracing::warn!(book_id = model.id, audience = %model.audience, "Unknown audience");
                Audience::default()
            });

            let mut genres: Vec<Genre> = genres.into_iter().map(Genre::from).collect();
            genres.sort_by(|a, b| a.name.cmp(&b.name));

            Ok(Book {
                id: model.id,
                title: model.title,
                publish_date: model.publish_date,
                audience,
                author: author.into(),
                genres,
            })
        })
        .collect()
}
