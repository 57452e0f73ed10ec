use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        likes::LikeDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::likes::LikesService,
        state::AppState,
    },
};

/// Tag for grouping like endpoints in OpenAPI documentation
pub static LIKES_TAG: &str = "likes";

/// Likes (`dir = 1`) or unlikes (`dir = 0`) a post.
///
/// # Returns
/// - `201 Created` - Like added or removed
/// - `400 Bad Request` - `dir` is neither 0 nor 1
/// - `404 Not Found` - Post missing, or no like to remove
/// - `409 Conflict` - Post already liked
#[utoipa::path(
    post,
    path = "/likes",
    tag = LIKES_TAG,
    request_body = LikeDto,
    responses(
        (status = 201, description = "Post liked or unliked", body = MessageDto),
        (status = 400, description = "Invalid dir", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post or like not found", body = ErrorDto),
        (status = 409, description = "Post already liked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn like(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LikeDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let outcome = LikesService::new(&state.db, &state.tasks)
        .vote(&actor, payload.post_id, payload.dir)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new(outcome.message()))))
}
