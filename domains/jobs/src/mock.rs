//! In-memory job store
//!
//! Backs `DOCUMENT_STORE=memory` and router tests that run without Postgres.
//! Every operation holds the collection lock for its whole duration, so the
//! counter update is atomic with respect to concurrent requests.

use std::sync::RwLock;

use jobboard_common::{ApplicationCountMode, Error, InsertAck, Result};
use uuid::Uuid;

use crate::domain::entities::{Job, JobDocument, JobFilter};
use crate::repository::JobStore;

#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("job store lock poisoned".to_string())
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document of a job, if present. Used by the applications store for
    /// enrichment without going through the async trait.
    pub fn find_document(&self, id: Uuid) -> Result<Option<JobDocument>> {
        let jobs = self.jobs.read().map_err(poisoned)?;
        Ok(jobs
            .iter()
            .find(|job| job.id == id)
            .map(|job| job.document.clone()))
    }

    /// Bump a job's counter without going through the async trait, so
    /// callers holding their own lock never await while holding it.
    /// Returns `false` when no job has this identifier.
    pub fn bump_application_count(&self, id: Uuid, mode: ApplicationCountMode) -> Result<bool> {
        let mut jobs = self.jobs.write().map_err(poisoned)?;
        let Some(job) = jobs.iter_mut().find(|job| job.id == id) else {
            return Ok(false);
        };

        let next = match mode {
            ApplicationCountMode::Accumulate => job
                .document
                .application_count()
                .unwrap_or(0)
                .max(0)
                .saturating_add(1),
            ApplicationCountMode::Reset => 1,
        };
        job.document.set_application_count(next);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.jobs.read().map(|jobs| jobs.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl JobStore for InMemoryJobStore {
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().map_err(poisoned)?;
        Ok(jobs
            .iter()
            .filter(|job| filter.matches(&job.document))
            .cloned()
            .collect())
    }

    async fn create_job(&self, document: JobDocument) -> Result<InsertAck> {
        let id = Uuid::new_v4();
        let mut jobs = self.jobs.write().map_err(poisoned)?;
        jobs.push(Job {
            id,
            document: document.into_insertable(),
        });
        Ok(InsertAck::new(id))
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>> {
        let jobs = self.jobs.read().map_err(poisoned)?;
        Ok(jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn increment_application_count(
        &self,
        id: Uuid,
        mode: ApplicationCountMode,
    ) -> Result<bool> {
        self.bump_application_count(id, mode)
    }
}
