//! HTTP surface consumed by the portfolio front-end.

mod error;
mod handlers;

pub use error::ApiError;

use axum::Router;
use axum::routing::{get, post};

use crate::storage::SharedStorage;

/// Build the API router over the chosen storage backend.
pub fn router(storage: SharedStorage) -> Router {
    Router::new()
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/education", get(handlers::list_education))
        .route("/api/experience", get(handlers::list_experience))
        .route("/api/skills", get(handlers::list_skills))
        .route("/api/awards", get(handlers::list_awards))
        .route("/api/publications", get(handlers::list_publications))
        .route("/api/contact", post(handlers::create_message))
        .with_state(storage)
}
