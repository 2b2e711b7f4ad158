//! User listing handler.

use axum::extract::State;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{ErrorResponse, PaginationQuery, UserFilter, UserResponse};
use crate::error::AppResult;
use crate::pagination::{PageOptions, PageRequest, PaginationResult};
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

/// Creates user-related routes.
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_users))
}

/// GET /api/users - List users one page at a time
///
/// A failed count or fetch still answers with the pagination envelope
/// (`success: false`) and status 500; the cause is only logged. Malformed
/// or repeated `page`/`size` values never reject the request.
#[utoipa::path(
    get,
    path = "/",
    tag = USER_TAG,
    params(PaginationQuery, UserFilter),
    responses(
        (status = 200, description = "One page of users", body = PaginationResult<UserResponse>),
        (status = 400, description = "Invalid search filter", body = ErrorResponse),
        (
            status = 500,
            description = "Count or fetch query failed",
            body = PaginationResult<UserResponse>
        )
    )
)]
async fn list_users(
    State(state): State<AppState>,
    page: PaginationQuery,
    ValidatedQuery(filter): ValidatedQuery<UserFilter>,
) -> AppResult<PaginationResult<UserResponse>> {
    let request = PageRequest::from(&page);

    let result = match state
        .services
        .users
        .list_users(&request, &PageOptions::default(), filter.search.as_deref())
        .await
    {
        Ok(result) => result,
        Err(failure) => {
            tracing::error!(
                stage = %failure.stage(),
                cause = ?failure.cause(),
                "Listing users failed"
            );
            failure.into_result()
        }
    };

    Ok(result.map(UserResponse::from))
}
