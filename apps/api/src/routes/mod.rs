pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/v1/content/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/content/variations",
            post(handlers::handle_variations),
        )
        .route("/api/v1/content/improve", post(handlers::handle_improve))
        .route("/api/v1/content/hashtags", post(handlers::handle_hashtags))
        .with_state(state)
}
