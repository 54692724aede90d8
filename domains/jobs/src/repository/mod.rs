//! Repository implementations for Jobs domain

pub mod jobs;
pub mod transactions;

use jobboard_common::{ApplicationCountMode, InsertAck, Result};
use uuid::Uuid;

use crate::domain::entities::{Job, JobDocument, JobFilter};

pub use jobs::PgJobStore;
pub use transactions::increment_application_count_tx;

/// Access to the job-postings collection
#[async_trait::async_trait]
pub trait JobStore: Send + Sync {
    /// All jobs matching the filter, in insertion order
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>>;

    /// Store a new job document and return its generated identifier
    async fn create_job(&self, document: JobDocument) -> Result<InsertAck>;

    /// Look up a single job; absence is not an error
    async fn get_job(&self, id: Uuid) -> Result<Option<Job>>;

    /// Atomically bump the job's `applicationCount`.
    /// Returns `false` when no job has this identifier.
    async fn increment_application_count(
        &self,
        id: Uuid,
        mode: ApplicationCountMode,
    ) -> Result<bool>;
}
