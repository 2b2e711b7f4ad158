//! Application state for Axum web framework.

use crate::db::AsyncDbPool;
use crate::pagination::{PaginationConfig, Paginator};
use crate::repositories::Repositories;
use crate::services::Services;

/// Shared services and resources handed to every request handler.
///
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Builds repositories and services on top of `pool`.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, settings.pagination);
    /// ```
    pub fn new(pool: AsyncDbPool, pagination: PaginationConfig) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos, Paginator::new(pagination));
        Self {
            services,
            db_pool: pool,
        }
    }
}
