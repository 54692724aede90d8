//! Repository implementations for Applications domain

pub mod applications;

use jobboard_common::{ApplicationCountMode, DeleteAck, InsertAck, Result, UpdateAck};
use uuid::Uuid;

use crate::domain::entities::{Application, ApplicationDocument, EnrichedApplication};

pub use applications::PgApplicationStore;

/// Access to the applications collection
#[async_trait::async_trait]
pub trait ApplicationStore: Send + Sync {
    /// An applicant's applications with their jobs' metadata attached.
    /// Applications whose job no longer exists are returned unenriched.
    async fn list_applications(&self, applicant_email: &str) -> Result<Vec<EnrichedApplication>>;

    /// Applications whose `jobId` equals `job_id` exactly
    async fn list_applications_for_job(&self, job_id: &str) -> Result<Vec<Application>>;

    /// Store an application and bump its job's counter as one unit.
    /// Fails with `NotFound`, storing nothing, when the job does not exist.
    async fn create_application(
        &self,
        document: ApplicationDocument,
        mode: ApplicationCountMode,
    ) -> Result<InsertAck>;

    async fn delete_application(&self, id: Uuid) -> Result<DeleteAck>;

    /// Set only the `status` field
    async fn update_application_status(&self, id: Uuid, status: &str) -> Result<UpdateAck>;
}
