//! Application repository

use jobboard_common::{ApplicationCountMode, DeleteAck, Error, InsertAck, Result, UpdateAck};
use jobboard_jobs::{increment_application_count_tx, JobDocument};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::ApplicationStore;
use crate::domain::entities::{Application, ApplicationDocument, EnrichedApplication};

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    id: Uuid,
    doc: Json<ApplicationDocument>,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Self {
            id: row.id,
            document: row.doc.0,
        }
    }
}

/// Application joined with its job's document, if the job exists
#[derive(sqlx::FromRow)]
struct EnrichedRow {
    id: Uuid,
    doc: Json<ApplicationDocument>,
    job_doc: Option<Json<JobDocument>>,
}

impl From<EnrichedRow> for EnrichedApplication {
    fn from(row: EnrichedRow) -> Self {
        let application = Application {
            id: row.id,
            document: row.doc.0,
        };
        EnrichedApplication::new(application, row.job_doc.as_ref().map(|job| &job.0))
    }
}

#[derive(sqlx::FromRow)]
struct UpdateCounts {
    matched: i64,
    modified: i64,
}

/// Postgres-backed application store (one JSONB document per row)
#[derive(Clone)]
pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn list_applications(&self, applicant_email: &str) -> Result<Vec<EnrichedApplication>> {
        let rows = sqlx::query_as::<_, EnrichedRow>(
            r#"
            SELECT a.id, a.doc, j.doc AS job_doc
            FROM applications a
            LEFT JOIN jobs j ON j.id::text = a.doc->>'jobId'
            WHERE a.doc->>'applicant_email' = $1
            ORDER BY a.created_at ASC, a.id ASC
            "#,
        )
        .bind(applicant_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_applications_for_job(&self, job_id: &str) -> Result<Vec<Application>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, doc
            FROM applications
            WHERE doc->>'jobId' = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_application(
        &self,
        document: ApplicationDocument,
        mode: ApplicationCountMode,
    ) -> Result<InsertAck> {
        let job_id = document.referenced_job()?;
        let id = Uuid::new_v4();

        let mut tx = self.pool.begin().await?;

        // Dropping the transaction on the early return rolls it back
        if !increment_application_count_tx(&mut tx, job_id, mode).await? {
            return Err(Error::NotFound(format!("Job {job_id} not found")));
        }

        sqlx::query("INSERT INTO applications (id, doc) VALUES ($1, $2)")
            .bind(id)
            .bind(Json(document.into_insertable(job_id)))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(application_id = %id, job_id = %job_id, "Application created");
        Ok(InsertAck::new(id))
    }

    async fn delete_application(&self, id: Uuid) -> Result<DeleteAck> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!(application_id = %id, deleted = result.rows_affected(), "Application deleted");
        Ok(DeleteAck::new(result.rows_affected()))
    }

    async fn update_application_status(&self, id: Uuid, status: &str) -> Result<UpdateAck> {
        // An unchanged status counts as matched but not modified
        let counts = sqlx::query_as::<_, UpdateCounts>(
            r#"
            WITH target AS (
                SELECT id, doc->'status' AS previous
                FROM applications
                WHERE id = $1
                FOR UPDATE
            ),
            updated AS (
                UPDATE applications a
                SET doc = jsonb_set(a.doc, '{status}', to_jsonb($2::text))
                FROM target t
                WHERE a.id = t.id AND t.previous IS DISTINCT FROM to_jsonb($2::text)
                RETURNING a.id
            )
            SELECT
                (SELECT COUNT(*) FROM target) AS matched,
                (SELECT COUNT(*) FROM updated) AS modified
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateAck::new(
            counts.matched.unsigned_abs(),
            counts.modified.unsigned_abs(),
        ))
    }
}
