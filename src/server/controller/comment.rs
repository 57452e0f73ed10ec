use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentCreatedDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comments";

#[utoipa::path(
    post,
    path = "/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = CommentCreatedDto),
        (status = 400, description = "Blank comment", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let comment = CommentService::new(&state.db, &state.tasks)
        .add(&actor, payload.post_id, payload.user_comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedDto {
            message: "Comment added successfully".to_string(),
            comment: comment.into_dto(),
        }),
    ))
}
