//! PostgreSQL implementation of talk repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::rows::{TALK_COLUMNS, TALK_WITH_SPEAKER_COLUMNS, TalkRow, TalkWithSpeakerRow};
use crate::domain::entities::{NewTalk, Talk};
use crate::domain::repositories::TalkRepository;
use crate::error::AppError;

/// PostgreSQL repository for talks.
///
/// Talks are addressed through their camp's moniker, so every lookup joins `camps`.
pub struct PgTalkRepository {
    pool: Arc<PgPool>,
}

impl PgTalkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Loads the talks (with speakers) of several camps in one query, grouped by camp id.
pub(crate) async fn load_talks_for_camps(
    pool: &PgPool,
    camp_ids: &[i64],
) -> Result<HashMap<i64, Vec<Talk>>, AppError> {
    if camp_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sql = format!(
        "SELECT {TALK_WITH_SPEAKER_COLUMNS}
         FROM talks t
         JOIN speakers s ON s.id = t.speaker_id
         WHERE t.camp_id = ANY($1)
         ORDER BY t.id"
    );

    let rows = sqlx::query_as::<_, TalkWithSpeakerRow>(&sql)
        .bind(camp_ids)
        .fetch_all(pool)
        .await?;

    let mut grouped: HashMap<i64, Vec<Talk>> = HashMap::new();
    for row in rows {
        let talk = Talk::from(row);
        grouped.entry(talk.camp_id).or_default().push(talk);
    }

    Ok(grouped)
}

#[async_trait]
impl TalkRepository for PgTalkRepository {
    async fn find_talks_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError> {
        let talks = if include_speakers {
            let sql = format!(
                "SELECT {TALK_WITH_SPEAKER_COLUMNS}
                 FROM talks t
                 JOIN camps c ON c.id = t.camp_id
                 JOIN speakers s ON s.id = t.speaker_id
                 WHERE c.moniker = $1
                 ORDER BY t.id"
            );
            sqlx::query_as::<_, TalkWithSpeakerRow>(&sql)
                .bind(moniker)
                .fetch_all(self.pool.as_ref())
                .await?
                .into_iter()
                .map(Talk::from)
                .collect()
        } else {
            let sql = format!(
                "SELECT {TALK_COLUMNS}
                 FROM talks t
                 JOIN camps c ON c.id = t.camp_id
                 WHERE c.moniker = $1
                 ORDER BY t.id"
            );
            sqlx::query_as::<_, TalkRow>(&sql)
                .bind(moniker)
                .fetch_all(self.pool.as_ref())
                .await?
                .into_iter()
                .map(Talk::from)
                .collect()
        };

        Ok(talks)
    }

    async fn find_talk_by_moniker(
        &self,
        moniker: &str,
        talk_id: i64,
        include_speakers: bool,
    ) -> Result<Option<Talk>, AppError> {
        let talk = if include_speakers {
            let sql = format!(
                "SELECT {TALK_WITH_SPEAKER_COLUMNS}
                 FROM talks t
                 JOIN camps c ON c.id = t.camp_id
                 JOIN speakers s ON s.id = t.speaker_id
                 WHERE c.moniker = $1 AND t.id = $2"
            );
            sqlx::query_as::<_, TalkWithSpeakerRow>(&sql)
                .bind(moniker)
                .bind(talk_id)
                .fetch_optional(self.pool.as_ref())
                .await?
                .map(Talk::from)
        } else {
            let sql = format!(
                "SELECT {TALK_COLUMNS}
                 FROM talks t
                 JOIN camps c ON c.id = t.camp_id
                 WHERE c.moniker = $1 AND t.id = $2"
            );
            sqlx::query_as::<_, TalkRow>(&sql)
                .bind(moniker)
                .bind(talk_id)
                .fetch_optional(self.pool.as_ref())
                .await?
                .map(Talk::from)
        };

        Ok(talk)
    }

    async fn insert_talk(&self, new_talk: NewTalk) -> Result<Option<Talk>, AppError> {
        let row = sqlx::query_as::<_, TalkRow>(
            r#"
            INSERT INTO talks AS t (camp_id, speaker_id, title, abstract, level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING t.id, t.camp_id, t.speaker_id, t.title, t.abstract AS abstract_text, t.level
            "#,
        )
        .bind(new_talk.camp_id)
        .bind(new_talk.speaker_id)
        .bind(&new_talk.title)
        .bind(&new_talk.abstract_text)
        .bind(new_talk.level)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Talk::from))
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE talks SET
                title      = $2,
                abstract   = $3,
                level      = $4,
                speaker_id = $5
            WHERE id = $1
            "#,
        )
        .bind(talk.id)
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .bind(talk.speaker_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM talks WHERE id = $1")
            .bind(talk_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
