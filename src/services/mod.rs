//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod user_service;

pub use user_service::UserService;

use crate::pagination::Paginator;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
}

impl Services {
    /// Creates the services from repositories and the shared paginator.
    pub fn new(repos: Repositories, paginator: Paginator) -> Self {
        Self {
            users: UserService::new(repos.users, paginator),
        }
    }
}
