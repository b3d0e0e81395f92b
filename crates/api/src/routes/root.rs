use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Paths of the two listing endpoints, as advertised by `GET /`.
pub const SLOW_POSTS_PATH: &str = "/api/posts/v1/slow";
pub const FAST_POSTS_PATH: &str = "/api/posts/v2/fast";

/// Root descriptor payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub slow: &'static str,
    pub fast: &'static str,
}

/// GET / -- names the service and lists the listing endpoints.
async fn describe() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Baseplate Blog API",
        endpoints: Endpoints {
            slow: SLOW_POSTS_PATH,
            fast: FAST_POSTS_PATH,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(describe))
}
