//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::camp_service::CampService`] - Camp lookup, search and lifecycle
//! - [`services::talk_service::TalkService`] - Talks nested under a camp
//! - [`services::speaker_service::SpeakerService`] - Speaker registry

pub mod services;
