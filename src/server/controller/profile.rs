use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::LoginForm,
        profile::{FollowersDto, FollowingDto, ProfileDto},
    },
    server::{error::AppError, service::profile::ProfileService, state::AppState},
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Returns a user's profile and posts after checking their credentials.
///
/// # Returns
/// - `200 OK` - Profile with follow counts and posts
/// - `401 Unauthorized` - Incorrect password
/// - `404 Not Found` - Unknown username
#[utoipa::path(
    post,
    path = "/user_profile",
    tag = PROFILE_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Profile", body = ProfileDto),
        (status = 401, description = "Incorrect password", body = ErrorDto),
        (status = 404, description = "Unknown username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn user_profile(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db, &state.tasks)
        .profile(&form.username, &form.password)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    get,
    path = "/followers/{username}",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Followers with follow date", body = FollowersDto),
        (status = 404, description = "User not found or no followers", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let followers = ProfileService::new(&state.db, &state.tasks)
        .followers(&username)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FollowersDto {
            followers: followers.into_iter().map(|f| f.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/following/{username}",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Followed accounts with follow date", body = FollowingDto),
        (status = 404, description = "User not found or not following anyone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn following(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let following = ProfileService::new(&state.db, &state.tasks)
        .following(&username)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FollowingDto {
            following: following.into_iter().map(|f| f.into_dto()).collect(),
        }),
    ))
}
