//! Camp management service.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::{Camp, CampInput};
use crate::domain::repositories::CampRepository;
use crate::error::AppError;

/// Service for camp lookups and the rules around creating, updating and
/// deleting camps.
///
/// Enforces:
/// - Unique monikers (checked before insert and before a rename)
/// - Not-found for every operation addressed by an unknown moniker
/// - A write that silently did nothing is reported as a bad request
pub struct CampService<C: CampRepository + ?Sized> {
    repository: Arc<C>,
}

impl<C: CampRepository + ?Sized> CampService<C> {
    /// Creates a new camp service.
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Lists all camps, optionally with talks and speakers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        self.repository.list_camps(include_talks).await
    }

    /// Retrieves a camp by moniker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp has this moniker.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Camp, AppError> {
        self.repository
            .find_camp(moniker, include_talks)
            .await?
            .ok_or_else(|| not_found(moniker))
    }

    /// Finds camps held on the given date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn search_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let camps = self
            .repository
            .find_camps_by_event_date(date, include_talks)
            .await?;

        if camps.is_empty() {
            return Err(AppError::not_found(format!(
                "No camps found for {}",
                date.format("%Y-%m-%d")
            )));
        }

        Ok(camps)
    }

    /// Creates a new camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the moniker is already in use or the
    /// insert wrote nothing.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_camp(&self, input: CampInput) -> Result<Camp, AppError> {
        if self
            .repository
            .find_camp(&input.moniker, false)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request("Moniker is in use"));
        }

        let camp = self
            .repository
            .insert_camp(input)
            .await?
            .ok_or_else(|| AppError::bad_request("Failed to save new camp"))?;

        tracing::info!(moniker = %camp.moniker, id = camp.id, "Camp created");
        Ok(camp)
    }

    /// Overwrites the editable fields of an existing camp.
    ///
    /// The body may rename the camp; the new moniker must not belong to another camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp has `moniker`.
    /// Returns [`AppError::BadRequest`] if the new moniker is taken or the save
    /// changed nothing.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_camp(&self, moniker: &str, input: CampInput) -> Result<Camp, AppError> {
        let mut camp = self
            .repository
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| not_found(moniker))?;

        if input.moniker != camp.moniker
            && self
                .repository
                .find_camp(&input.moniker, false)
                .await?
                .is_some()
        {
            return Err(AppError::bad_request("Moniker is in use"));
        }

        camp.apply(input);

        if !self.repository.update_camp(&camp).await? {
            return Err(AppError::bad_request("Failed to update camp"));
        }

        tracing::info!(moniker = %camp.moniker, id = camp.id, "Camp updated");
        Ok(camp)
    }

    /// Deletes a camp together with its talks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp has `moniker`.
    /// Returns [`AppError::BadRequest`] if the delete removed nothing.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_camp(&self, moniker: &str) -> Result<(), AppError> {
        let camp = self
            .repository
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| not_found(moniker))?;

        if !self.repository.delete_camp(camp.id).await? {
            return Err(AppError::bad_request("Failed to delete camp"));
        }

        tracing::info!(moniker = %camp.moniker, id = camp.id, "Camp deleted");
        Ok(())
    }

    /// Verifies that storage answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if storage is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(moniker: &str) -> AppError {
    AppError::not_found(format!("Could not find camp with moniker of {moniker}"))
}
