//! Genre repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::entities::genre::{self, ActiveModel, Entity as GenreEntity};
use crate::domain::Genre;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Genre repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;

    /// Fetch the genres with the given ids; unknown ids are skipped
    async fn find_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<Genre>>;

    /// List all genres ordered by name
    async fn list(&self) -> AppResult<Vec<Genre>>;

    async fn create(&self, name: String) -> AppResult<Genre>;
}

/// Concrete implementation of GenreRepository
pub struct GenreStore {
    db: DatabaseConnection,
}

impl GenreStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for GenreStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let result = GenreEntity::find()
            .filter(genre::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Genre::from))
    }

    async fn find_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<Genre>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = GenreEntity::find()
            .filter(genre::Column::Id.is_in(ids))
            .order_by_asc(genre::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Genre::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Genre>> {
        let models = GenreEntity::find()
            .order_by_asc(genre::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Genre::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Genre> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Genre"),
                _ => AppError::from(e),
            }
        })?;

        Ok(Genre::from(model))
    }
}
