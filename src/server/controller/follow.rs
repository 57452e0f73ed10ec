use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        follow::FollowDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::follow::FollowService,
        state::AppState,
    },
};

/// Tag for grouping follow endpoints in OpenAPI documentation
pub static FOLLOW_TAG: &str = "follow";

#[utoipa::path(
    post,
    path = "/follow",
    tag = FOLLOW_TAG,
    request_body = FollowDto,
    responses(
        (status = 200, description = "Followed", body = MessageDto),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User to follow not found", body = ErrorDto),
        (status = 409, description = "Already following", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn follow(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FollowDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    FollowService::new(&state.db)
        .follow(&actor, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Followed successfully"))))
}

#[utoipa::path(
    delete,
    path = "/unfollow",
    tag = FOLLOW_TAG,
    request_body = FollowDto,
    responses(
        (status = 200, description = "Unfollowed", body = MessageDto),
        (status = 400, description = "Not following this user", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unfollow(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FollowDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    FollowService::new(&state.db)
        .unfollow(&actor, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Unfollowed successfully"))))
}
