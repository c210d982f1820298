//! Handlers for camp endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::{CampModel, IncludeTalksQuery, SearchQuery};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::CampInput;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::datetime::parse_date_time;
use crate::utils::link_generator::camp_path;

/// Lists all camps, newest event first.
///
/// # Endpoint
///
/// `GET /api/camps?includeTalks=true`
pub async fn list_camps_handler(
    State(state): State<AppState>,
    Query(query): Query<IncludeTalksQuery>,
) -> Result<Json<Vec<CampModel>>, AppError> {
    let camps = state.camp_service.list_camps(query.include_talks).await?;
    Ok(Json(camps.into_iter().map(CampModel::from).collect()))
}

/// Returns a single camp.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}?includeTalks=true`
///
/// # Errors
///
/// - **404 Not Found**: No camp with this moniker
pub async fn get_camp_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Query(query): Query<IncludeTalksQuery>,
) -> Result<Json<CampModel>, AppError> {
    let camp = state
        .camp_service
        .get_camp(&moniker, query.include_talks)
        .await?;
    Ok(Json(camp.into()))
}

/// Finds camps held on a given day.
///
/// # Endpoint
///
/// `GET /api/camps/search?theDate=2018-10-18&includeTalks=true`
///
/// `theDate` accepts a date or a date-time; only the calendar date is compared.
///
/// # Errors
///
/// - **400 Bad Request**: `theDate` missing or not a date
/// - **404 Not Found**: No camp on that day
pub async fn search_camps_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CampModel>>, AppError> {
    let date = parse_date_time(&query.the_date)
        .ok_or_else(|| {
            AppError::validation(
                "Invalid search date",
                json!({ "theDate": query.the_date }),
            )
        })?
        .date();

    let camps = state
        .camp_service
        .search_by_event_date(date, query.include_talks)
        .await?;
    Ok(Json(camps.into_iter().map(CampModel::from).collect()))
}

/// Creates a camp.
///
/// # Endpoint
///
/// `POST /api/camps`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Atlanta Code Camp",
///   "moniker": "ATL2018",
///   "eventDate": "2018-10-18T00:00:00",
///   "length": 1,
///   "venue": "Atlanta Convention Center"
/// }
/// ```
///
/// # Response
///
/// **201 Created** with `Location: /api/camps/{moniker}` and the stored camp.
///
/// # Errors
///
/// - **400 Bad Request**: Invalid body, moniker in use, moniker not usable in a URL
pub async fn create_camp_handler(
    State(state): State<AppState>,
    ValidatedJson(model): ValidatedJson<CampModel>,
) -> Result<impl IntoResponse, AppError> {
    let location = camp_path(&model.moniker)
        .ok_or_else(|| AppError::bad_request("Could not use current moniker"))?;

    let camp = state
        .camp_service
        .create_camp(CampInput::from(model))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CampModel::from(camp)),
    ))
}

/// Replaces the editable fields of a camp.
///
/// # Endpoint
///
/// `PUT /api/camps/{moniker}`
///
/// The body may carry a different moniker, which renames the camp.
///
/// # Errors
///
/// - **404 Not Found**: No camp with this moniker
/// - **400 Bad Request**: Invalid body, new moniker taken or unusable, save failed
pub async fn update_camp_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    ValidatedJson(model): ValidatedJson<CampModel>,
) -> Result<Json<CampModel>, AppError> {
    if model.moniker != moniker && camp_path(&model.moniker).is_none() {
        return Err(AppError::bad_request("Could not use current moniker"));
    }

    let camp = state
        .camp_service
        .update_camp(&moniker, CampInput::from(model))
        .await?;
    Ok(Json(camp.into()))
}

/// Deletes a camp and its talks.
///
/// # Endpoint
///
/// `DELETE /api/camps/{moniker}`
///
/// # Errors
///
/// - **404 Not Found**: No camp with this moniker
/// - **400 Bad Request**: Nothing was deleted
pub async fn delete_camp_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<StatusCode, AppError> {
    state.camp_service.delete_camp(&moniker).await?;
    Ok(StatusCode::OK)
}
