//! Route definitions for post listings, mounted at `/api/posts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// ```text
/// GET /v1/slow    -> list_posts_slow
/// GET /v2/fast    -> list_posts_fast
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/slow", get(posts::list_posts_slow))
        .route("/v2/fast", get(posts::list_posts_fast))
}
