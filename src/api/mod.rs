pub mod health;
pub mod voice;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Voice queries
        .route("/process-voice", post(voice::process_voice))
        .with_state(state)
}
