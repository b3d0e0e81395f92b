#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use baseplate_core::fixtures::fixture_posts;
use baseplate_core::latency::RowDelay;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use baseplate_api::config::ServerConfig;
use baseplate_api::router::build_app_router;
use baseplate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given slow-path delay.
pub fn test_config(slow_row_delay: RowDelay) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: baseplate_db::DEFAULT_MAX_CONNECTIONS,
        cors_origins: vec!["http://localhost:5173".to_string()],
        slow_row_delay,
    }
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_delay(pool, RowDelay::from_millis(0))
}

pub fn build_test_app_with_delay(pool: SqlitePool, slow_row_delay: RowDelay) -> Router {
    let config = test_config(slow_row_delay);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Insert `count` fixture posts.
pub async fn seed(pool: &SqlitePool, count: usize) {
    let fixtures = fixture_posts(count).unwrap();
    baseplate_db::seed::seed_posts(pool, &fixtures).await.unwrap();
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
