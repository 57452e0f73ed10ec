use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PageQuery},
        content::{
            ContentByUsernameQuery, ContentCreatedDto, ContentDeletedDto, CreateContentForm,
            PaginatedContentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::content::{NewContent, Upload},
        service::content::ContentService,
        state::AppState,
    },
};

/// Tag for grouping content endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

#[utoipa::path(
    get,
    path = "/welcome",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Greeting", body = MessageDto)
    ),
)]
pub async fn welcome() -> impl IntoResponse {
    Json(MessageDto::new("Welcome to TrendConnect"))
}

/// Uploads a new post.
///
/// # Access Control
/// - Bearer token; an optional `username` field must name the caller
///
/// # Returns
/// - `201 Created` - Post stored, followers notified in the background
/// - `400 Bad Request` - Missing field or malformed multipart body
/// - `403 Forbidden` - `username` field names someone else
#[utoipa::path(
    post,
    path = "/create_content",
    tag = CONTENT_TAG,
    request_body(content = CreateContentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Content created", body = ContentCreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Username does not match the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let (new, username) = read_content_form(multipart).await?;
    if username.is_some_and(|u| u != author.username) {
        return Err(AppError::Forbidden(
            "Not authorized to post content for another user".to_string(),
        ));
    }

    let content = ContentService::new(&state.db, &state.tasks, &state.storage)
        .create(&author, new)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContentCreatedDto {
            message: "Content created successfully".to_string(),
            content_id: content.c_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/get_content",
    tag = CONTENT_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedContentDto),
        (status = 400, description = "Invalid choice of page", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let page = ContentService::new(&state.db, &state.tasks, &state.storage)
        .get_page(query.page)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/get_content_by_username",
    tag = CONTENT_TAG,
    params(ContentByUsernameQuery),
    responses(
        (status = 200, description = "Page of the author's posts", body = PaginatedContentDto),
        (status = 400, description = "Invalid choice of page", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_content_by_username(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ContentByUsernameQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let page = ContentService::new(&state.db, &state.tasks, &state.storage)
        .get_page_by_username(&query.username, query.page)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/delete_content/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Content ID")
    ),
    responses(
        (status = 200, description = "Content deleted", body = ContentDeletedDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    ContentService::new(&state.db, &state.tasks, &state.storage)
        .delete(&actor, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ContentDeletedDto {
            message: "Content deleted successfully".to_string(),
            id,
        }),
    ))
}

/// Collects the multipart fields of a new post, plus the optional `username`.
async fn read_content_form(
    mut multipart: Multipart,
) -> Result<(NewContent, Option<String>), AppError> {
    let mut title = None;
    let mut caption = None;
    let mut username = None;
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("title") => title = Some(field.text().await?),
            Some("caption") => caption = Some(field.text().await?),
            Some("username") => username = Some(field.text().await?),
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await?.to_vec();
                upload = Some(Upload { filename, bytes });
            }
            _ => {}
        }
    }

    let new = NewContent {
        title: title.ok_or_else(|| missing_field("title"))?,
        caption: caption.ok_or_else(|| missing_field("caption"))?,
        upload: upload.ok_or_else(|| missing_field("file"))?,
    };

    Ok((new, username.filter(|u| !u.trim().is_empty())))
}

fn missing_field(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing required field: {}", name))
}
