//! Service Container - Centralized service access.
//!
//! Holds the auth, user and catalog services behind their traits so
//! handlers depend on abstractions only.

use std::future::Future;
use std::sync::Arc;

use super::{AuthService, CatalogService, UserService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    catalog_service: Arc<dyn CatalogService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, CatalogManager, UserManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            catalog_service: Arc::new(CatalogManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }
}

/// Run independent lookups concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    ///
    /// # Example
    /// ```ignore
    /// let (authors, genres) = parallel::join2(
    ///     catalog.list_authors(),
    ///     catalog.list_genres(),
    /// ).await?;
    /// ```
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn authors() -> AppResult<Vec<&'static str>> {
            Ok(vec!["Harper Lee"])
        }
        async fn genres() -> AppResult<usize> {
            Ok(2)
        }

        let (a, g) = parallel::join2(authors(), genres()).await.unwrap();
        assert_eq!(a, vec!["Harper Lee"]);
        assert_eq!(g, 2);
    }

    #[tokio::test]
    async fn test_parallel_join3_short_circuits() {
        async fn ok() -> AppResult<i32> {
            Ok(1)
        }
        async fn missing() -> AppResult<i32> {
            Err(AppError::NotFound)
        }

        let result = parallel::join3(ok(), missing(), ok()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
