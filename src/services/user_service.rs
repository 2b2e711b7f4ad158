//! User listing service.

use crate::models::User;
use crate::pagination::{PageOptions, PageRequest, PaginationFailure, PaginationResult, Paginator};
use crate::repositories::UserRepository;

/// User service wrapping the repository and the paginator.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    paginator: Paginator,
}

impl UserService {
    pub fn new(repo: UserRepository, paginator: Paginator) -> Self {
        Self { repo, paginator }
    }

    /// Lists one page of users, optionally filtered by `search`.
    ///
    /// The search filter is bound before counting, so `records` and `pages`
    /// describe the filtered set.
    pub async fn list_users(
        &self,
        request: &PageRequest,
        options: &PageOptions,
        search: Option<&str>,
    ) -> Result<PaginationResult<User>, PaginationFailure<User>> {
        let mut listing = self.repo.listing(search);
        self.paginator.list(request, options, &mut listing).await
    }
}
