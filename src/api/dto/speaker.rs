//! Wire model for speakers.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A speaker as sent and received by the API.
///
/// Nested inside a talk payload it acts as a reference: only `speakerId` is read.
/// Field rules apply when registering a speaker via `POST /api/speakers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerModel {
    #[serde(default)]
    pub speaker_id: i64,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Last name is required"))]
    pub last_name: String,

    pub middle_name: Option<String>,
    pub company: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub company_url: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub blog_url: Option<String>,

    pub twitter: Option<String>,

    #[serde(rename = "gitHub")]
    pub github: Option<String>,
}
