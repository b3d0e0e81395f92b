//! Handlers for the post listing endpoints.
//!
//! Both endpoints return the same array of `{id, title, content}` objects.
//! They differ only in the repository path they call and therefore in latency.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use baseplate_core::latency::elapsed_millis;
use baseplate_db::models::post::Post;
use baseplate_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/posts/v1/slow
///
/// Lists every post through the per-row path: one extra lookup plus the
/// configured delay for each row. Roughly two seconds at 100 rows.
pub async fn list_posts_slow(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let started = Instant::now();
    let posts =
        PostRepo::list_all_with_row_delay(&state.pool, state.config.slow_row_delay).await?;

    tracing::debug!(
        rows = posts.len(),
        elapsed_ms = elapsed_millis(started.elapsed()),
        "Listed posts (slow path)",
    );

    Ok(Json(posts))
}

/// GET /api/posts/v2/fast
///
/// Lists every post with a single query.
pub async fn list_posts_fast(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let started = Instant::now();
    let posts = PostRepo::list_all(&state.pool).await?;

    tracing::debug!(
        rows = posts.len(),
        elapsed_ms = elapsed_millis(started.elapsed()),
        "Listed posts (fast path)",
    );

    Ok(Json(posts))
}
