pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::inference::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Inference API
        .route("/api/v1/inference", post(handlers::handle_infer))
        .with_state(state)
}
