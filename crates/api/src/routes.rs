use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Admin HTML surface at the root plus a small JSON API under `/api`.
pub fn create_admin_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/cache", get(handlers::get_cache));

    Router::new()
        .merge(handlers::admin::routes())
        .nest("/api", api)
        .with_state(state)
}
