//! Helpers shared by the API layer.
//!
//! - [`datetime`] - Lenient date/date-time parsing and its serde adapter
//! - [`link_generator`] - Location paths for created resources

pub mod datetime;
pub mod link_generator;
