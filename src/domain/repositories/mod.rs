//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. Write
//! operations report whether the write took effect (`bool` / `Option`) so that
//! services can turn a silent no-op into a client error instead of a crash.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CampRepository`] - Camp lookups and writes
//! - [`TalkRepository`] - Talks scoped to a camp moniker
//! - [`SpeakerRepository`] - Speaker lookups and creation

pub mod camp_repository;
pub mod speaker_repository;
pub mod talk_repository;

pub use camp_repository::CampRepository;
pub use speaker_repository::SpeakerRepository;
pub use talk_repository::TalkRepository;

#[cfg(test)]
pub use camp_repository::MockCampRepository;
#[cfg(test)]
pub use speaker_repository::MockSpeakerRepository;
#[cfg(test)]
pub use talk_repository::MockTalkRepository;
