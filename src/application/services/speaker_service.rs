//! Speaker service.

use std::sync::Arc;

use crate::domain::entities::{NewSpeaker, Speaker};
use crate::domain::repositories::SpeakerRepository;
use crate::error::AppError;

/// Service for listing, retrieving and registering speakers.
pub struct SpeakerService<S: SpeakerRepository + ?Sized> {
    repository: Arc<S>,
}

impl<S: SpeakerRepository + ?Sized> SpeakerService<S> {
    /// Creates a new speaker service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Lists all speakers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        self.repository.list_speakers().await
    }

    /// Retrieves a speaker by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the speaker does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_speaker(&self, speaker_id: i64) -> Result<Speaker, AppError> {
        self.repository
            .find_speaker(speaker_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Could not find speaker with id of {speaker_id}"))
            })
    }

    /// Registers a new speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let speaker = self.repository.insert_speaker(new_speaker).await?;
        tracing::info!(speaker_id = speaker.id, "Speaker created");
        Ok(speaker)
    }
}
