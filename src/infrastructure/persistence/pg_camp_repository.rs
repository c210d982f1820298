//! PostgreSQL implementation of camp repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_talk_repository::load_talks_for_camps;
use super::rows::{CAMP_COLUMNS, CampRow};
use crate::domain::entities::{Camp, CampInput};
use crate::domain::repositories::CampRepository;
use crate::error::AppError;

const MONIKER_CONSTRAINT: &str = "camps_moniker_key";

/// PostgreSQL repository for camps.
///
/// Moniker uniqueness is backed by the `camps_moniker_key` constraint. An insert
/// or rename that loses a race on it reports "not saved" instead of failing.
pub struct PgCampRepository {
    pool: Arc<PgPool>,
}

impl PgCampRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn with_talks(&self, rows: Vec<CampRow>, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let mut camps: Vec<Camp> = rows.into_iter().map(Camp::from).collect();

        if include_talks {
            let ids: Vec<i64> = camps.iter().map(|c| c.id).collect();
            let mut talks = load_talks_for_camps(self.pool.as_ref(), &ids).await?;
            for camp in &mut camps {
                camp.talks = talks.remove(&camp.id).unwrap_or_default();
            }
        }

        Ok(camps)
    }
}

#[async_trait]
impl CampRepository for PgCampRepository {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let sql = format!("SELECT {CAMP_COLUMNS} FROM camps ORDER BY event_date DESC, id");

        let rows = sqlx::query_as::<_, CampRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        self.with_talks(rows, include_talks).await
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        let sql = format!("SELECT {CAMP_COLUMNS} FROM camps WHERE moniker = $1");

        let row = sqlx::query_as::<_, CampRow>(&sql)
            .bind(moniker)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.with_talks(vec![row], include_talks).await?.pop())
    }

    async fn find_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let sql = format!(
            "SELECT {CAMP_COLUMNS} FROM camps WHERE event_date::date = $1 ORDER BY event_date, id"
        );

        let rows = sqlx::query_as::<_, CampRow>(&sql)
            .bind(date)
            .fetch_all(self.pool.as_ref())
            .await?;

        self.with_talks(rows, include_talks).await
    }

    async fn insert_camp(&self, input: CampInput) -> Result<Option<Camp>, AppError> {
        let sql = format!(
            "INSERT INTO camps (name, moniker, event_date, length, venue_name, address1, address2,
                                address3, city_town, state_province, postal_code, country)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             ON CONFLICT (moniker) DO NOTHING
             RETURNING {CAMP_COLUMNS}"
        );

        let location = input.location;
        let row = sqlx::query_as::<_, CampRow>(&sql)
            .bind(input.name)
            .bind(input.moniker)
            .bind(input.event_date)
            .bind(input.length)
            .bind(location.venue_name)
            .bind(location.address1)
            .bind(location.address2)
            .bind(location.address3)
            .bind(location.city_town)
            .bind(location.state_province)
            .bind(location.postal_code)
            .bind(location.country)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Camp::from))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        let location = &camp.location;
        let result = sqlx::query(
            r#"
            UPDATE camps SET
                name           = $2,
                moniker        = $3,
                event_date     = $4,
                length         = $5,
                venue_name     = $6,
                address1       = $7,
                address2       = $8,
                address3       = $9,
                city_town      = $10,
                state_province = $11,
                postal_code    = $12,
                country        = $13
            WHERE id = $1
            "#,
        )
        .bind(camp.id)
        .bind(&camp.name)
        .bind(&camp.moniker)
        .bind(camp.event_date)
        .bind(camp.length)
        .bind(&location.venue_name)
        .bind(&location.address1)
        .bind(&location.address2)
        .bind(&location.address3)
        .bind(&location.city_town)
        .bind(&location.state_province)
        .bind(&location.postal_code)
        .bind(&location.country)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(sqlx::Error::Database(db)) if db.constraint() == Some(MONIKER_CONSTRAINT) => {
                tracing::warn!(moniker = %camp.moniker, "Rename lost a race on the moniker");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        // Talks go with the camp via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM camps WHERE id = $1")
            .bind(camp_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
