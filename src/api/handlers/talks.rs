//! Handlers for talks nested under a camp.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::TalkModel;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::TalkInput;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::link_generator::{camp_path, talk_path};

/// Lists a camp's talks with speakers.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}/talks`
///
/// An unknown moniker returns an empty array.
pub async fn list_talks_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<Json<Vec<TalkModel>>, AppError> {
    let talks = state.talk_service.list_talks(&moniker).await?;
    Ok(Json(talks.into_iter().map(TalkModel::from).collect()))
}

/// Returns one talk with its speaker.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}/talks/{id}`
///
/// # Errors
///
/// - **404 Not Found**: The camp has no such talk
pub async fn get_talk_handler(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, i64)>,
) -> Result<Json<TalkModel>, AppError> {
    let talk = state.talk_service.get_talk(&moniker, talk_id).await?;
    Ok(Json(talk.into()))
}

/// Adds a talk to a camp.
///
/// # Endpoint
///
/// `POST /api/camps/{moniker}/talks`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Entity Framework From Scratch",
///   "abstract": "Working with Entity Framework from the ground up",
///   "level": 100,
///   "speaker": { "speakerId": 1 }
/// }
/// ```
///
/// # Response
///
/// **201 Created** with `Location: /api/camps/{moniker}/talks/{id}`.
///
/// # Errors
///
/// - **400 Bad Request**: Invalid body, moniker not usable in a URL, unknown camp,
///   missing or unknown speaker
pub async fn create_talk_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    ValidatedJson(model): ValidatedJson<TalkModel>,
) -> Result<impl IntoResponse, AppError> {
    let camp_location = camp_path(&moniker)
        .ok_or_else(|| AppError::bad_request("Could not use current moniker"))?;

    let talk = state
        .talk_service
        .create_talk(&moniker, TalkInput::from(model))
        .await?;

    let location = talk_path(&camp_location, talk.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TalkModel::from(talk)),
    ))
}

/// Replaces a talk's title, abstract and level.
///
/// # Endpoint
///
/// `PUT /api/camps/{moniker}/talks/{id}`
///
/// A `speaker.speakerId` naming an existing speaker moves the talk to that
/// speaker; an unknown one is ignored.
///
/// # Errors
///
/// - **404 Not Found**: The camp has no such talk
/// - **400 Bad Request**: Invalid body or save failed
pub async fn update_talk_handler(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, i64)>,
    ValidatedJson(model): ValidatedJson<TalkModel>,
) -> Result<Json<TalkModel>, AppError> {
    let talk = state
        .talk_service
        .update_talk(&moniker, talk_id, TalkInput::from(model))
        .await?;
    Ok(Json(talk.into()))
}

/// Removes a talk from a camp.
///
/// # Endpoint
///
/// `DELETE /api/camps/{moniker}/talks/{id}`
pub async fn delete_talk_handler(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    state.talk_service.delete_talk(&moniker, talk_id).await?;
    Ok(StatusCode::OK)
}
