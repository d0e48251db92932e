pub mod export;
pub mod health;
pub mod resumes;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(resumes::handle_parse))
        .route("/api/v1/resumes/parse/csv", post(resumes::handle_parse_csv))
        .with_state(state)
}
