//! Camp entity representing a conference event.

use chrono::NaiveDateTime;

use super::talk::Talk;

/// Where a camp takes place. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A conference event.
///
/// `moniker` is the human-readable unique key used in every URL. `talks` is only
/// populated when the repository was asked to include them.
#[derive(Debug, Clone)]
pub struct Camp {
    pub id: i64,
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    /// Duration in days.
    pub length: i32,
    pub location: Location,
    pub talks: Vec<Talk>,
}

impl Camp {
    /// Builds a camp from stored fields with no talks loaded.
    pub fn from_input(id: i64, input: CampInput) -> Self {
        Self {
            id,
            name: input.name,
            moniker: input.moniker,
            event_date: input.event_date,
            length: input.length,
            location: input.location,
            talks: Vec::new(),
        }
    }

    /// Overwrites every client-editable field, keeping `id` and loaded talks.
    pub fn apply(&mut self, input: CampInput) {
        self.name = input.name;
        self.moniker = input.moniker;
        self.event_date = input.event_date;
        self.length = input.length;
        self.location = input.location;
    }
}

/// Client-supplied camp fields, used for both creation and full overwrite.
#[derive(Debug, Clone)]
pub struct CampInput {
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub location: Location,
}
