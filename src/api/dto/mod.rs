//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase property names and `validator` for
//! field rules. Conversions to and from domain entities live in
//! [`crate::api::mapper`].

pub mod camp;
pub mod health;
pub mod query;
pub mod speaker;
pub mod talk;

pub use camp::CampModel;
pub use query::{IncludeTalksQuery, SearchQuery};
pub use speaker::SpeakerModel;
pub use talk::TalkModel;
