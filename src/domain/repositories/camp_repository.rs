//! Repository trait for camps.

use crate::domain::entities::{Camp, CampInput};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for camps.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCampRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryRepository`] - in-process storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Lists every camp ordered by event date.
    ///
    /// With `include_talks`, each camp carries its talks and each talk its speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError>;

    /// Finds a camp by moniker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_camp(&self, moniker: &str, include_talks: bool)
    -> Result<Option<Camp>, AppError>;

    /// Lists camps whose event falls on `date`. Time of day is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError>;

    /// Stores a new camp.
    ///
    /// Returns `None` when nothing was written (e.g. the moniker was taken
    /// concurrently).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_camp(&self, input: CampInput) -> Result<Option<Camp>, AppError>;

    /// Persists every editable field of `camp`. Returns `false` if no row changed,
    /// including when another camp already holds `camp.moniker`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError>;

    /// Deletes a camp and its talks. Returns `false` if no row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError>;

    /// Cheap round trip used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if storage is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
