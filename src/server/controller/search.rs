use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        search::{
            ContentSearchResultDto, TitleSearchQuery, UserSearchResultDto, UsernameSearchQuery,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::search::SearchService,
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

#[utoipa::path(
    get,
    path = "/search",
    tag = SEARCH_TAG,
    params(UsernameSearchQuery),
    responses(
        (status = 200, description = "Matching usernames", body = UserSearchResultDto),
        (status = 400, description = "Invalid choice of page", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn search_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UsernameSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let result = SearchService::new(&state.db)
        .users(&query.username, query.page)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Searches post titles, or looks a post up by id when `title` is all digits.
#[utoipa::path(
    get,
    path = "/search_by_title",
    tag = SEARCH_TAG,
    params(TitleSearchQuery),
    responses(
        (status = 200, description = "Matching posts", body = ContentSearchResultDto),
        (status = 400, description = "Invalid choice of page", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn search_by_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TitleSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let result = SearchService::new(&state.db)
        .content(&query.title, query.page)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
