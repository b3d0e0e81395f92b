pub mod health;
pub mod posts;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /posts/v1/slow        list posts, per-row lookup + delay
/// /posts/v2/fast        list posts, single query
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/posts", posts::router())
}
