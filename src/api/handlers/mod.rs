//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod camps;
pub mod health;
pub mod speakers;
pub mod talks;

pub use camps::{
    create_camp_handler, delete_camp_handler, get_camp_handler, list_camps_handler,
    search_camps_handler, update_camp_handler,
};
pub use health::health_handler;
pub use speakers::{create_speaker_handler, get_speaker_handler, list_speakers_handler};
pub use talks::{
    create_talk_handler, delete_talk_handler, get_talk_handler, list_talks_handler,
    update_talk_handler,
};
