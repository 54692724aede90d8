//! Job repository

use jobboard_common::{ApplicationCountMode, InsertAck, Result};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::transactions::increment_application_count_tx;
use super::JobStore;
use crate::domain::entities::{Job, JobDocument, JobFilter};

#[derive(sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    doc: Json<JobDocument>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            document: row.doc.0,
        }
    }
}

/// Postgres-backed job store (one JSONB document per row)
#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl JobStore for PgJobStore {
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, doc
            FROM jobs
            WHERE $1::text IS NULL OR doc->>'hr_email' = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(filter.hr_email.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_job(&self, document: JobDocument) -> Result<InsertAck> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO jobs (id, doc) VALUES ($1, $2)")
            .bind(id)
            .bind(Json(document.into_insertable()))
            .execute(&self.pool)
            .await?;

        tracing::info!(job_id = %id, "Job created");
        Ok(InsertAck::new(id))
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>("SELECT id, doc FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_application_count(
        &self,
        id: Uuid,
        mode: ApplicationCountMode,
    ) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let updated = increment_application_count_tx(&mut tx, id, mode).await?;
        tx.commit().await?;
        Ok(updated)
    }
}
