//! Repository trait for speakers.

use crate::domain::entities::{NewSpeaker, Speaker};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for speakers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Finds a speaker by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError>;

    /// Lists all speakers ordered by last name, then first name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError>;

    /// Stores a new speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError>;
}
