use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PageQuery},
        registration::{CompleteRegistrationDto, RegistrationResponseDto, SendOtpDto, VerifyOtpDto},
        user::{PaginatedUsersDto, UpdateUserDto, UserSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{AccountChanges, NewAccountParam},
        service::{registration::RegistrationService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping registration and account endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Issues an OTP for a new registration.
///
/// # Returns
/// - `200 OK` - OTP generated and delivery queued
/// - `400 Bad Request` - Invalid email address
/// - `409 Conflict` - Email already belongs to an account
/// - `429 Too Many Requests` - Retry limit reached while the current OTP is valid
#[utoipa::path(
    post,
    path = "/register/send_otp",
    tag = USER_TAG,
    request_body = SendOtpDto,
    responses(
        (status = 200, description = "OTP sent", body = MessageDto),
        (status = 400, description = "Invalid email address", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 429, description = "Too many OTP requests", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<SendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    RegistrationService::new(
        &state.db,
        &state.tasks,
        state.otp_expiration_minutes,
        state.max_retry_attempts,
    )
    .send_otp(&payload.email, payload.phone_number)
    .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "OTP sent successfully to {}. Please verify your OTP.",
            payload.email
        ))),
    ))
}

#[utoipa::path(
    post,
    path = "/register/verify_otp",
    tag = USER_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "OTP verified", body = MessageDto),
        (status = 400, description = "OTP expired", body = ErrorDto),
        (status = 401, description = "Invalid OTP", body = ErrorDto),
        (status = 404, description = "Email not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    RegistrationService::new(
        &state.db,
        &state.tasks,
        state.otp_expiration_minutes,
        state.max_retry_attempts,
    )
    .verify_otp(&payload.email, payload.otp)
    .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "OTP verified successfully. Please complete your registration.",
        )),
    ))
}

/// Turns a verified pending registration into an active account.
///
/// # Returns
/// - `200 OK` - Account created
/// - `400 Bad Request` - No registration for the email, or OTP not verified
/// - `406 Not Acceptable` - Age, password or phone rule failed
/// - `409 Conflict` - Already registered or username taken
#[utoipa::path(
    post,
    path = "/register/complete_registration",
    tag = USER_TAG,
    request_body = CompleteRegistrationDto,
    responses(
        (status = 200, description = "Registration complete", body = RegistrationResponseDto),
        (status = 400, description = "OTP not verified", body = ErrorDto),
        (status = 406, description = "Profile rule failed", body = ErrorDto),
        (status = 409, description = "Already registered or username taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_registration(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = RegistrationService::new(
        &state.db,
        &state.tasks,
        state.otp_expiration_minutes,
        state.max_retry_attempts,
    )
    .complete(NewAccountParam::from_dto(payload))
    .await?;

    Ok((
        StatusCode::OK,
        Json(RegistrationResponseDto {
            user_id: user.user_id,
            username: user.username,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/get_users",
    tag = USER_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of active users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid choice of page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db, &state.tasks)
        .get_users(query.page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

#[utoipa::path(
    get,
    path = "/get_user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with follow counts", body = UserSummaryDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.tasks)
        .get_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Updates the caller's own account.
///
/// # Access Control
/// - Bearer token of the account being updated
///
/// # Returns
/// - `200 OK` - Account updated
/// - `403 Forbidden` - Caller is a different user
/// - `404 Not Found` - No such account
/// - `406 Not Acceptable` - Age, password or phone rule failed
/// - `409 Conflict` - Username or email already in use
#[utoipa::path(
    put,
    path = "/update_user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = RegistrationResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 406, description = "Profile rule failed", body = ErrorDto),
        (status = 409, description = "Username or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    payload.validate()?;

    let user = UserService::new(&state.db, &state.tasks)
        .update(&actor, user_id, AccountChanges::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(RegistrationResponseDto {
            user_id: user.user_id,
            username: user.username,
        }),
    ))
}

/// Deletes the caller's account and everything attached to it.
#[utoipa::path(
    delete,
    path = "/delete_user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    UserService::new(&state.db, &state.tasks)
        .delete(&actor, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
