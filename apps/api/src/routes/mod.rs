pub mod health;

use axum::{extract::OriginalUri, routing::get, routing::post, Router};

use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::screening::handlers as screening;
use crate::state::AppState;

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/screening", post(screening::handle_screen))
        .route("/api/v1/screening/batch", post(screening::handle_screen_batch))
        .route("/api/v1/screening/override", post(screening::handle_override))
        // Matching API
        .route("/api/v1/matching/score", post(matching::handle_match_score))
        .route("/api/v1/matching/jobs", post(matching::handle_job_matches))
        .route(
            "/api/v1/matching/applicants",
            post(matching::handle_applicant_matches),
        )
        .fallback(not_found)
        .with_state(state)
}
