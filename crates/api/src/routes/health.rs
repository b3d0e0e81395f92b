//! `GET /health`: whether the blog store answers, and what the demo is serving.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use baseplate_db::repositories::PostRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct BlogHealth {
    /// `"ok"` when the posts table can be counted, `"degraded"` otherwise.
    pub status: &'static str,
    /// Rows currently in `posts`; `null` when the store is unreachable.
    pub posts: Option<i64>,
    /// Delay the slow listing pays per row.
    pub slow_row_delay_ms: u64,
}

async fn blog_health(State(state): State<AppState>) -> Json<BlogHealth> {
    let posts = match PostRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Post count unavailable");
            None
        }
    };

    Json(BlogHealth {
        status: if posts.is_some() { "ok" } else { "degraded" },
        posts,
        slow_row_delay_ms: state.config.slow_row_delay.millis(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(blog_health))
}
