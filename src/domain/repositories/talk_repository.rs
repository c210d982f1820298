//! Repository trait for talks.

use crate::domain::entities::{NewTalk, Talk};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for talks. Lookups are scoped by camp moniker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TalkRepository: Send + Sync {
    /// Lists the talks of a camp. An unknown moniker yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_talks_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError>;

    /// Finds one talk by id, only if it belongs to the camp named by `moniker`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_talk_by_moniker(
        &self,
        moniker: &str,
        talk_id: i64,
        include_speakers: bool,
    ) -> Result<Option<Talk>, AppError>;

    /// Stores a new talk. Returns `None` when nothing was written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_talk(&self, new_talk: NewTalk) -> Result<Option<Talk>, AppError>;

    /// Persists title, abstract, level and speaker of `talk`.
    /// Returns `false` if no row changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError>;

    /// Deletes a talk. Returns `false` if no row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError>;
}
