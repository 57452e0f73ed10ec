//! Route-level tests driving the full router with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::Algorithm;
use serde_json::Value;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::sync::mpsc::UnboundedReceiver;
use tower::ServiceExt;

use crate::server::{
    model::user::User,
    router::router,
    service::{storage::ContentStorage, token::TokenService},
    state::AppState,
    task::{BackgroundTask, TaskQueue},
};


struct TestApp {
    router: Router,
    tokens: TokenService,
    test: TestContext,
    _receiver: UnboundedReceiver<BackgroundTask>,
    _content_dir: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let content_dir = tempfile::tempdir().unwrap();
        let tokens = TokenService::new("test-secret", Algorithm::HS256, 30);
        let (tasks, receiver) = TaskQueue::new();

        let state = AppState {
            db: test.db.clone().unwrap(),
            tokens: tokens.clone(),
            tasks,
            storage: ContentStorage::new(content_dir.path()),
            otp_expiration_minutes: 10,
            max_retry_attempts: 3,
        };

        Self {
            router: router().with_state(state),
            tokens,
            test,
            _receiver: receiver,
            _content_dir: content_dir,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    fn bearer(&self, user: &entity::registration::Model) -> String {
        let user = User::from_entity(user.clone()).unwrap();
        format!("Bearer {}", self.tokens.issue(&user).unwrap())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    with_auth(Request::builder().method(Method::GET).uri(uri), auth)
        .body(Body::empty())
        .unwrap()
}

fn json(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    with_auth(Request::builder().method(method).uri(uri), auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn with_auth(builder: axum::http::request::Builder, auth: Option<&str>) -> axum::http::request::Builder {
    match auth {
        Some(value) => builder.header(header::AUTHORIZATION, value),
        None => builder,
    }
}
