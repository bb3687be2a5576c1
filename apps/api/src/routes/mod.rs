pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/screenings", post(handlers::handle_screen))
        .route(
            "/api/v1/screenings/export",
            post(handlers::handle_screen_export),
        )
        .layer(body_limit)
        .with_state(state)
}
