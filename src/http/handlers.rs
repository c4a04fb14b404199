//! Request handlers for the content and contact endpoints.
//!
//! Read handlers pass storage results straight through; an absent profile
//! maps to 404, everything else surfaces via [`ApiError`].

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::error::ApiError;
use crate::domain::{
    Award, Education, Experience, Message, NewMessage, Profile, Publication, Skill,
};
use crate::storage::SharedStorage;

pub async fn get_profile(
    State(storage): State<SharedStorage>,
) -> Result<Json<Profile>, ApiError> {
    match storage.find_profile().await? {
        Some(profile) => Ok(Json(profile)),
        None => Err(ApiError::NotFound("profile")),
    }
}

pub async fn list_education(
    State(storage): State<SharedStorage>,
) -> Result<Json<Vec<Education>>, ApiError> {
    Ok(Json(storage.list_education().await?))
}

pub async fn list_experience(
    State(storage): State<SharedStorage>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    Ok(Json(storage.list_experience().await?))
}

pub async fn list_skills(
    State(storage): State<SharedStorage>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(storage.list_skills().await?))
}

pub async fn list_awards(
    State(storage): State<SharedStorage>,
) -> Result<Json<Vec<Award>>, ApiError> {
    Ok(Json(storage.list_awards().await?))
}

pub async fn list_publications(
    State(storage): State<SharedStorage>,
) -> Result<Json<Vec<Publication>>, ApiError> {
    Ok(Json(storage.list_publications().await?))
}

pub async fn create_message(
    State(storage): State<SharedStorage>,
    Json(new): Json<NewMessage>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = storage.create_message(new).await?;
    log::info!("stored contact message {}", message.id);
    Ok((StatusCode::CREATED, Json(message)))
}
