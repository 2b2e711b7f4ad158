//! User repository for async database operations.

use async_trait::async_trait;
use diesel::debug_query;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::pagination::DataSource;
use crate::schema::users;

/// User repository holding an async connection pool.
///
/// `AsyncDbPool` (bb8::Pool) is an `Arc` internally, so cloning is cheap.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Users matching `search` (case-insensitive, on username or email),
    /// ordered by id. `None` lists everyone.
    pub fn listing(&self, search: Option<&str>) -> UserListing {
        UserListing {
            pool: self.pool.clone(),
            pattern: search.map(|s| format!("%{}%", escape_like(s))),
            debug: false,
        }
    }
}

/// Filtered user query handed to the paginator.
#[derive(Clone)]
pub struct UserListing {
    pool: AsyncDbPool,
    pattern: Option<String>,
    debug: bool,
}

impl UserListing {
    /// `ILIKE` pattern applied to username and email, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    fn filtered(&self) -> users::BoxedQuery<'static, Pg> {
        let mut query = users::table.into_boxed();
        if let Some(pattern) = &self.pattern {
            query = query.filter(
                users::username
                    .ilike(pattern.clone())
                    .or(users::email.ilike(pattern.clone())),
            );
        }
        query
    }
}

#[async_trait]
impl DataSource for UserListing {
    type Row = User;

    async fn count(&self) -> AppResult<i64> {
        let query = self.filtered().count();
        if self.debug {
            tracing::debug!(sql = %debug_query::<Pg, _>(&query), "Counting users");
        }

        let mut conn = self.pool.get().await?;
        query
            .get_result::<i64>(&mut conn)
            .await
            .map_err(|e| AppError::database("count users", e))
    }

    async fn fetch(&self, limit: i64, offset: i64) -> AppResult<Vec<User>> {
        let query = self
            .filtered()
            .order(users::id.asc())
            .limit(limit)
            .offset(offset)
            .select(User::as_select());
        if self.debug {
            tracing::debug!(sql = %debug_query::<Pg, _>(&query), "Loading users");
        }

        let mut conn = self.pool.get().await?;
        query
            .load::<User>(&mut conn)
            .await
            .map_err(|e| AppError::database("load users", e))
    }

    fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }
}

/// Escapes `LIKE` wildcards so user input only matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("alice"), "alice");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    fn repository() -> UserRepository {
        let manager = diesel_async::pooled_connection::AsyncDieselConnectionManager::<
            diesel_async::AsyncPgConnection,
        >::new("postgres://localhost/pager");
        UserRepository::new(bb8::Pool::builder().build_unchecked(manager))
    }

    #[tokio::test]
    async fn test_listing_without_search() {
        let listing = repository().listing(None);
        assert!(listing.pattern().is_none());

        let sql = debug_query::<Pg, _>(&listing.filtered().count()).to_string();
        assert!(sql.contains("COUNT(*)"));
        assert!(!sql.contains("ILIKE"));
    }

    #[tokio::test]
    async fn test_listing_binds_escaped_search() {
        let listing = repository().listing(Some("bob_"));
        assert_eq!(listing.pattern(), Some("%bob\\_%"));

        let sql = debug_query::<Pg, _>(&listing.filtered().count()).to_string();
        assert!(sql.contains("ILIKE"));
    }

    #[tokio::test]
    async fn test_set_debug() {
        let mut listing = repository().listing(None);
        assert!(!listing.debug());
        listing.set_debug(true);
        assert!(listing.debug());
    }
}
