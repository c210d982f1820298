//! Wire model for talks.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::speaker::SpeakerModel;

/// A talk as sent and received by the API.
///
/// On input, `talkId` is ignored and `speaker` only needs its `speakerId`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TalkModel {
    #[serde(default)]
    pub talk_id: i64,

    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title is required and must be at most 100 characters"
    ))]
    pub title: String,

    #[serde(default, rename = "abstract")]
    #[validate(length(min = 20, max = 400, message = "Abstract must be 20 to 400 characters"))]
    pub abstract_text: String,

    #[serde(default)]
    #[validate(range(min = 100, max = 500, message = "Level must be between 100 and 500"))]
    pub level: i32,

    #[serde(default)]
    pub speaker: Option<SpeakerModel>,
}
