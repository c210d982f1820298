//! Talk management service.

use std::sync::Arc;

use crate::domain::entities::{NewTalk, Talk, TalkInput};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use crate::error::AppError;

/// Service for talks nested under a camp.
///
/// Creating a talk requires an existing camp and an existing speaker. Updating
/// a talk may re-point it at another speaker; an unknown speaker reference on
/// update is ignored.
pub struct TalkService<C, T, S>
where
    C: CampRepository + ?Sized,
    T: TalkRepository + ?Sized,
    S: SpeakerRepository + ?Sized,
{
    camp_repository: Arc<C>,
    talk_repository: Arc<T>,
    speaker_repository: Arc<S>,
}

impl<C, T, S> TalkService<C, T, S>
where
    C: CampRepository + ?Sized,
    T: TalkRepository + ?Sized,
    S: SpeakerRepository + ?Sized,
{
    /// Creates a new talk service.
    pub fn new(camp_repository: Arc<C>, talk_repository: Arc<T>, speaker_repository: Arc<S>) -> Self {
        Self {
            camp_repository,
            talk_repository,
            speaker_repository,
        }
    }

    /// Lists a camp's talks with their speakers. An unknown camp yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError> {
        self.talk_repository
            .find_talks_by_moniker(moniker, true)
            .await
    }

    /// Retrieves one talk of a camp with its speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp has no talk with this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_talk(&self, moniker: &str, talk_id: i64) -> Result<Talk, AppError> {
        self.talk_repository
            .find_talk_by_moniker(moniker, talk_id, true)
            .await?
            .ok_or_else(talk_not_found)
    }

    /// Creates a talk in a camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if:
    /// - the camp does not exist
    /// - no speaker reference was supplied
    /// - the referenced speaker does not exist
    /// - the insert wrote nothing
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_talk(&self, moniker: &str, input: TalkInput) -> Result<Talk, AppError> {
        let camp = self
            .camp_repository
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| AppError::bad_request("Camp does not exist"))?;

        let speaker_id = input
            .speaker_id
            .ok_or_else(|| AppError::bad_request("Speaker ID is required"))?;

        let speaker = self
            .speaker_repository
            .find_speaker(speaker_id)
            .await?
            .ok_or_else(|| AppError::bad_request("Speaker could not be found"))?;

        let new_talk = NewTalk {
            camp_id: camp.id,
            speaker_id: speaker.id,
            title: input.title,
            abstract_text: input.abstract_text,
            level: input.level,
        };

        let mut talk = self
            .talk_repository
            .insert_talk(new_talk)
            .await?
            .ok_or_else(|| AppError::bad_request("Failed to save new talk"))?;
        talk.attach_speaker(speaker);

        tracing::info!(moniker, talk_id = talk.id, "Talk created");
        Ok(talk)
    }

    /// Overwrites a talk's content and optionally re-points its speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp has no talk with this id.
    /// Returns [`AppError::BadRequest`] if the save changed nothing.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_talk(
        &self,
        moniker: &str,
        talk_id: i64,
        input: TalkInput,
    ) -> Result<Talk, AppError> {
        let mut talk = self
            .talk_repository
            .find_talk_by_moniker(moniker, talk_id, true)
            .await?
            .ok_or_else(talk_not_found)?;

        talk.apply(&input);

        if let Some(speaker_id) = input.speaker_id
            && let Some(speaker) = self.speaker_repository.find_speaker(speaker_id).await?
        {
            talk.attach_speaker(speaker);
        }

        if !self.talk_repository.update_talk(&talk).await? {
            return Err(AppError::bad_request("Failed to update talk"));
        }

        tracing::info!(moniker, talk_id = talk.id, "Talk updated");
        Ok(talk)
    }

    /// Deletes a talk from a camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp has no talk with this id.
    /// Returns [`AppError::BadRequest`] if the delete removed nothing.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_talk(&self, moniker: &str, talk_id: i64) -> Result<(), AppError> {
        let talk = self
            .talk_repository
            .find_talk_by_moniker(moniker, talk_id, false)
            .await?
            .ok_or_else(talk_not_found)?;

        if !self.talk_repository.delete_talk(talk.id).await? {
            return Err(AppError::bad_request("Failed to delete talk"));
        }

        tracing::info!(moniker, talk_id = talk.id, "Talk deleted");
        Ok(())
    }
}

fn talk_not_found() -> AppError {
    AppError::not_found("Couldn't find the talk")
}
