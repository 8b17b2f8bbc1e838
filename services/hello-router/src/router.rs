use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::home;

/// Exactly one route. Anything else falls through to axum's defaults:
/// 404 for an unmatched path, 405 for a known path with the wrong method.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(home))
        .layer(TraceLayer::new_for_http())
}
