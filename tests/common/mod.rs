#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use site_backend::{
    AppState,
    config::{Config, Environment},
    router::build_router,
    utils::{AUTH_COOKIE, issue_session_token},
};

pub const ADMIN_PASSWORD: &str = "integration-test-password";

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://postgres@127.0.0.1:1/site_test".into(),
        redis_url: "redis://127.0.0.1:1".into(),
        admin_password: ADMIN_PASSWORD.into(),
        jwt_secret: "integration-test-signing-key".into(),
        session_ttl_secs: 3600,
        server_host: "127.0.0.1".into(),
        server_port: 3000,
        environment: Environment::Development,
    }
}

/// State wired to nothing: the pool is lazy and the Redis port is closed, so
/// any handler that actually touches storage fails instead of hanging. That
/// makes "the handler was never reached" and "validation ran first"
/// observable without live services.
pub fn test_state() -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool construction must not fail");
    let redis =
        redis::Client::open(config.redis_url.clone()).expect("redis client construction");
    AppState {
        pool,
        config,
        redis: Arc::new(redis),
    }
}

pub fn test_app() -> Router {
    build_router(test_state())
}

/// A valid session cookie minted with the test signing key, bypassing the
/// login route.
pub fn admin_cookie() -> String {
    let token = issue_session_token(&test_config()).expect("token issues");
    format!("{AUTH_COOKIE}={token}")
}

pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    app.clone().oneshot(request).await.expect("router responds")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
