//! API route configuration.

use crate::api::handlers::{
    create_camp_handler, create_speaker_handler, create_talk_handler, delete_camp_handler,
    delete_talk_handler, get_camp_handler, get_speaker_handler, get_talk_handler,
    list_camps_handler, list_speakers_handler, list_talks_handler, search_camps_handler,
    update_camp_handler, update_talk_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /camps`                        - List camps
/// - `POST   /camps`                        - Create a camp
/// - `GET    /camps/search`                 - Camps on a given date
/// - `GET    /camps/{moniker}`              - Get a camp
/// - `PUT    /camps/{moniker}`              - Update a camp
/// - `DELETE /camps/{moniker}`              - Delete a camp and its talks
/// - `GET    /camps/{moniker}/talks`        - List a camp's talks
/// - `POST   /camps/{moniker}/talks`        - Add a talk
/// - `GET    /camps/{moniker}/talks/{id}`   - Get a talk
/// - `PUT    /camps/{moniker}/talks/{id}`   - Update a talk
/// - `DELETE /camps/{moniker}/talks/{id}`   - Delete a talk
/// - `GET    /speakers`                     - List speakers
/// - `POST   /speakers`                     - Register a speaker
/// - `GET    /speakers/{id}`                - Get a speaker
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/camps", get(list_camps_handler).post(create_camp_handler))
        // Static segment, matched ahead of `/camps/{moniker}`.
        .route("/camps/search", get(search_camps_handler))
        .route(
            "/camps/{moniker}",
            get(get_camp_handler)
                .put(update_camp_handler)
                .delete(delete_camp_handler),
        )
        .route(
            "/camps/{moniker}/talks",
            get(list_talks_handler).post(create_talk_handler),
        )
        .route(
            "/camps/{moniker}/talks/{id}",
            get(get_talk_handler)
                .put(update_talk_handler)
                .delete(delete_talk_handler),
        )
        .route(
            "/speakers",
            get(list_speakers_handler).post(create_speaker_handler),
        )
        .route("/speakers/{id}", get(get_speaker_handler))
}
