//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx with runtime-built queries decoded through
//! `FromRow`. The in-memory repository implements all three traits on one value.
//!
//! # Repositories
//!
//! - [`PgCampRepository`] - Camp storage, search and cascade delete
//! - [`PgTalkRepository`] - Talks scoped to a camp moniker
//! - [`PgSpeakerRepository`] - Speaker storage
//! - [`InMemoryRepository`] - Process-local storage for tests and demos

pub mod memory_repository;
pub mod pg_camp_repository;
pub mod pg_speaker_repository;
pub mod pg_talk_repository;
mod rows;

pub use memory_repository::InMemoryRepository;
pub use pg_camp_repository::PgCampRepository;
pub use pg_speaker_repository::PgSpeakerRepository;
pub use pg_talk_repository::PgTalkRepository;
