use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginForm, LoginResponseDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    get,
    path = "/login_welcome",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Greeting", body = MessageDto)
    ),
)]
pub async fn login_welcome() -> impl IntoResponse {
    Json(MessageDto::new("Welcome to the TrendConnect login page"))
}

/// Exchanges a username and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Incorrect password
/// - `404 Not Found` - No active account with that username
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 401, description = "Incorrect password", body = ErrorDto),
        (status = 404, description = "Unknown username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .authenticate(&form.username, &form.password)
        .await?;
    let token = state.tokens.issue(&user)?;

    tracing::info!(user_id = user.user_id, "User logged in");

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            token,
            token_type: "bearer".to_string(),
            user_id: user.user_id,
            expires_in: state.tokens.expires_in(),
        }),
    ))
}

/// Tokens are stateless, so logging out only means the client discards its token.
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto::new(
            "Logout successful. Please remove the token from your client.",
        )),
    )
}
