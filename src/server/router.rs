use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        auth::{LoginForm, LoginResponseDto},
        comment::{CommentCreatedDto, CommentDto, CreateCommentDto},
        content::{
            ContentCreatedDto, ContentDeletedDto, ContentDetailDto, CreateContentForm,
            PaginatedContentDto,
        },
        follow::FollowDto,
        likes::LikeDto,
        profile::{FollowEntryDto, FollowersDto, FollowingDto, ProfileContentDto, ProfileDto},
        registration::{CompleteRegistrationDto, RegistrationResponseDto, SendOtpDto, VerifyOtpDto},
        search::{ContentSearchItemDto, ContentSearchResultDto, UserSearchResultDto},
        user::{PaginatedUsersDto, UpdateUserDto, UserSummaryDto},
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            comment::{self, COMMENT_TAG},
            content::{self, CONTENT_TAG},
            follow::{self, FOLLOW_TAG},
            health::{self, HEALTH_TAG},
            likes::{self, LIKES_TAG},
            profile::{self, PROFILE_TAG},
            search::{self, SEARCH_TAG},
            user::{self, USER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "TrendConnect API"),
    paths(
        auth::login_welcome,
        auth::login,
        auth::logout,
        user::send_otp,
        user::verify_otp,
        user::complete_registration,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        content::welcome,
        content::create_content,
        content::get_content,
        content::get_content_by_username,
        content::delete_content,
        likes::like,
        comment::create_comment,
        search::search_users,
        search::search_by_title,
        profile::user_profile,
        profile::followers,
        profile::following,
        follow::follow,
        follow::unfollow,
        health::health,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        LoginForm,
        LoginResponseDto,
        SendOtpDto,
        VerifyOtpDto,
        CompleteRegistrationDto,
        RegistrationResponseDto,
        UserSummaryDto,
        PaginatedUsersDto,
        UpdateUserDto,
        CreateContentForm,
        ContentCreatedDto,
        ContentDeletedDto,
        ContentDetailDto,
        PaginatedContentDto,
        LikeDto,
        CreateCommentDto,
        CommentDto,
        CommentCreatedDto,
        UserSearchResultDto,
        ContentSearchItemDto,
        ContentSearchResultDto,
        ProfileDto,
        ProfileContentDto,
        FollowEntryDto,
        FollowersDto,
        FollowingDto,
        FollowDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Login and logout"),
        (name = USER_TAG, description = "Registration and account management"),
        (name = CONTENT_TAG, description = "Posts"),
        (name = LIKES_TAG, description = "Likes"),
        (name = COMMENT_TAG, description = "Comments"),
        (name = SEARCH_TAG, description = "Username and title search"),
        (name = PROFILE_TAG, description = "Profiles and follow lists"),
        (name = FOLLOW_TAG, description = "Follow relationships"),
        (name = HEALTH_TAG, description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by authenticated endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login_welcome", get(auth::login_welcome))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/register/send_otp", post(user::send_otp))
        .route("/register/verify_otp", post(user::verify_otp))
        .route(
            "/register/complete_registration",
            post(user::complete_registration),
        )
        .route("/get_users", get(user::get_users))
        .route("/get_user/{user_id}", get(user::get_user))
        .route("/update_user/{user_id}", put(user::update_user))
        .route("/delete_user/{user_id}", delete(user::delete_user))
        .route("/welcome", get(content::welcome))
        .route("/create_content", post(content::create_content))
        .route("/get_content", get(content::get_content))
        .route(
            "/get_content_by_username",
            get(content::get_content_by_username),
        )
        .route("/delete_content/{id}", delete(content::delete_content))
        .route("/likes", post(likes::like))
        .route("/comments", post(comment::create_comment))
        .route("/search", get(search::search_users))
        .route("/search_by_title", get(search::search_by_title))
        .route("/user_profile", post(profile::user_profile))
        .route("/followers/{username}", get(profile::followers))
        .route("/following/{username}", get(profile::following))
        .route("/follow", post(follow::follow))
        .route("/unfollow", delete(follow::unfollow))
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
