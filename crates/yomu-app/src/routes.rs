use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, method_not_allowed, tokenize};
use crate::state::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tokenize", post(tokenize).fallback(method_not_allowed))
        .route("/api/health", get(health))
}

/// Mount the API under `base_path` (empty for the root)
pub fn create_router(state: Arc<AppState>, base_path: &str) -> Router {
    let api = create_routes().with_state(state);

    let app = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(base_path, api)
    };

    app.layer(TraceLayer::new_for_http())
}
