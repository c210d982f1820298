//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Camp`] - A conference event identified by its moniker
//! - [`Talk`] - A presentation scheduled at one camp, given by one speaker
//! - [`Speaker`] - A person who gives talks
//!
//! # Design Pattern
//!
//! Entities are plain data. Separate input structs describe writes:
//! - `CampInput`, `TalkInput`, `NewSpeaker` - incoming field sets
//! - `NewTalk` - a fully resolved talk ready to insert

pub mod camp;
pub mod speaker;
pub mod talk;

pub use camp::{Camp, CampInput, Location};
pub use speaker::{NewSpeaker, Speaker};
pub use talk::{NewTalk, Talk, TalkInput};
