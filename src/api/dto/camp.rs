//! Wire model for camps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::talk::TalkModel;

fn default_length() -> i32 {
    1
}

/// A camp as sent and received by the API.
///
/// The location is flattened into `venue` and `location*` properties.
/// `talks` is only filled when the request asked for `includeTalks=true` and is
/// ignored on input.
///
/// ```json
/// {
///   "name": "Atlanta Code Camp",
///   "moniker": "ATL2018",
///   "eventDate": "2018-10-18T00:00:00",
///   "length": 1,
///   "venue": "Atlanta Convention Center",
///   "locationCityTown": "Atlanta",
///   "talks": []
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CampModel {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Moniker is required"))]
    pub moniker: String,

    #[serde(with = "crate::utils::datetime::flexible")]
    pub event_date: NaiveDateTime,

    /// Duration in days.
    #[serde(default = "default_length")]
    #[validate(range(min = 1, max = 100, message = "Length must be between 1 and 100 days"))]
    pub length: i32,

    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,

    #[serde(default)]
    pub talks: Vec<TalkModel>,
}
