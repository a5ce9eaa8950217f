//! Shared plumbing for the HTTP-level tests: a router backed by a fresh
//! in-memory database, user factories and request helpers.

use api::auth::generate_jwt;
use api::routes::routes;
use api::state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Method, Request, Response,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};
use db::models::user::{Model as UserModel, Role};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

#[ctor::ctor]
fn init_test_config() {
    unsafe {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::set_var("JWT_DURATION_MINUTES", "60");
        std::env::set_var("DATABASE_URL", "sqlite::memory:");
        std::env::set_var("LOG_FILE", "logs/test.log");
    }
    common::Config::init(".env.test");
}

pub struct TestApp {
    pub app: Router,
    pub db: DatabaseConnection,
}

/// Fresh router and database per test; nothing is shared between tests.
pub async fn make_test_app() -> TestApp {
    let state = AppState::new(setup_test_db().await);
    TestApp {
        app: routes(state.clone()),
        db: state.db_clone(),
    }
}

pub async fn make_user(db: &DatabaseConnection, name: &str, role: Role, admin: bool) -> UserModel {
    UserModel::create(db, name, &format!("{name}@example.com"), "pw", role, admin)
        .await
        .expect("failed to create user")
}

pub fn token_for(user: &UserModel) -> String {
    generate_jwt(user.id, user.is_admin()).0
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}
