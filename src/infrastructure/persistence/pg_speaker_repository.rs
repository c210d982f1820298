//! PostgreSQL implementation of speaker repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{SPEAKER_COLUMNS, SpeakerRow};
use crate::domain::entities::{NewSpeaker, Speaker};
use crate::domain::repositories::SpeakerRepository;
use crate::error::AppError;

/// PostgreSQL repository for speakers.
pub struct PgSpeakerRepository {
    pool: Arc<PgPool>,
}

impl PgSpeakerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpeakerRepository for PgSpeakerRepository {
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        let sql = format!("SELECT {SPEAKER_COLUMNS} FROM speakers WHERE id = $1");

        let row = sqlx::query_as::<_, SpeakerRow>(&sql)
            .bind(speaker_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Speaker::from))
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        let sql =
            format!("SELECT {SPEAKER_COLUMNS} FROM speakers ORDER BY last_name, first_name, id");

        let rows = sqlx::query_as::<_, SpeakerRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Speaker::from).collect())
    }

    async fn insert_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let sql = format!(
            "INSERT INTO speakers (first_name, last_name, middle_name, company, company_url,
                                   blog_url, twitter, github)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {SPEAKER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, SpeakerRow>(&sql)
            .bind(new_speaker.first_name)
            .bind(new_speaker.last_name)
            .bind(new_speaker.middle_name)
            .bind(new_speaker.company)
            .bind(new_speaker.company_url)
            .bind(new_speaker.blog_url)
            .bind(new_speaker.twitter)
            .bind(new_speaker.github)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(Speaker::from(row))
    }
}
