//! Author repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::author::{self, ActiveModel, Entity as AuthorEntity};
use crate::domain::Author;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Author repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>>;

    /// List all authors ordered by name
    async fn list(&self) -> AppResult<Vec<Author>>;

    async fn create(&self, name: String, biography: String) -> AppResult<Author>;
}

/// Concrete implementation of AuthorRepository
pub struct AuthorStore {
    db: DatabaseConnection,
}

impl AuthorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let result = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Author::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .order_by_asc(author::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Author::from))
    }

    async fn list(&self) -> AppResult<Vec<Author>> {
        let models = AuthorEntity::find()
            .order_by_asc(author::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Author::from).collect())
    }

    async fn create(&self, name: String, biography: String) -> AppResult<Author> {
        let active_model = ActiveModel {
            name: Set(name),
            biography: Set(biography),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Author::from(model))
    }
}
