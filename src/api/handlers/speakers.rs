//! Handlers for speaker endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::SpeakerModel;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::NewSpeaker;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::link_generator::speaker_path;

/// `GET /api/speakers`
pub async fn list_speakers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpeakerModel>>, AppError> {
    let speakers = state.speaker_service.list_speakers().await?;
    Ok(Json(speakers.into_iter().map(SpeakerModel::from).collect()))
}

/// `GET /api/speakers/{id}`
pub async fn get_speaker_handler(
    State(state): State<AppState>,
    Path(speaker_id): Path<i64>,
) -> Result<Json<SpeakerModel>, AppError> {
    let speaker = state.speaker_service.get_speaker(speaker_id).await?;
    Ok(Json(speaker.into()))
}

/// Registers a speaker.
///
/// # Endpoint
///
/// `POST /api/speakers`
///
/// Responds **201 Created** with `Location: /api/speakers/{id}`. Any
/// `speakerId` in the body is ignored.
pub async fn create_speaker_handler(
    State(state): State<AppState>,
    ValidatedJson(model): ValidatedJson<SpeakerModel>,
) -> Result<impl IntoResponse, AppError> {
    let speaker = state
        .speaker_service
        .create_speaker(NewSpeaker::from(model))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, speaker_path(speaker.id))],
        Json(SpeakerModel::from(speaker)),
    ))
}
