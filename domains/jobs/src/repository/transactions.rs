//! Transaction helpers for Jobs domain

use jobboard_common::ApplicationCountMode;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Counter update that adds one, treating a missing or non-numeric count as
/// 0 and saturating at the `bigint` maximum
const ACCUMULATE_APPLICATION_COUNT: &str = r#"
    UPDATE jobs
    SET doc = jsonb_set(
        doc,
        '{applicationCount}',
        to_jsonb(
            LEAST(
                GREATEST(
                    COALESCE(
                        CASE WHEN jsonb_typeof(doc->'applicationCount') = 'number'
                             THEN trunc((doc->>'applicationCount')::numeric)
                        END,
                        0
                    ),
                    0
                ) + 1,
                9223372036854775807
            )::bigint
        )
    )
    WHERE id = $1
"#;

/// Counter update that always writes 1
const RESET_APPLICATION_COUNT: &str = r#"
    UPDATE jobs
    SET doc = jsonb_set(doc, '{applicationCount}', '1'::jsonb)
    WHERE id = $1
"#;

/// Bump a job's application counter within a transaction.
/// A single statement, so concurrent submissions cannot lose updates.
/// Returns `false` when the job does not exist.
pub async fn increment_application_count_tx(
    tx: &mut Transaction<'_, Postgres>,
    job_id: Uuid,
    mode: ApplicationCountMode,
) -> Result<bool, sqlx::Error> {
    let query = match mode {
        ApplicationCountMode::Accumulate => ACCUMULATE_APPLICATION_COUNT,
        ApplicationCountMode::Reset => RESET_APPLICATION_COUNT,
    };

    let result = sqlx::query(query).bind(job_id).execute(&mut **tx).await?;
    Ok(result.rows_affected() > 0)
}
