//! In-memory application store
//!
//! Shares an `InMemoryJobStore` for the job lookups and counter updates the
//! Postgres store does with joins and transactions.

use std::sync::{Arc, Mutex};

use jobboard_common::{ApplicationCountMode, DeleteAck, Error, InsertAck, Result, UpdateAck};
use jobboard_jobs::InMemoryJobStore;
use uuid::Uuid;

use crate::domain::entities::{Application, ApplicationDocument, EnrichedApplication};
use crate::repository::ApplicationStore;

pub struct InMemoryApplicationStore {
    jobs: Arc<InMemoryJobStore>,
    applications: Mutex<Vec<Application>>,
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("application store lock poisoned".to_string())
}

impl InMemoryApplicationStore {
    pub fn new(jobs: Arc<InMemoryJobStore>) -> Self {
        Self {
            jobs,
            applications: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.applications
            .lock()
            .map(|applications| applications.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn list_applications(&self, applicant_email: &str) -> Result<Vec<EnrichedApplication>> {
        let matching: Vec<Application> = {
            let applications = self.applications.lock().map_err(poisoned)?;
            applications
                .iter()
                .filter(|app| app.document.applicant_email() == Some(applicant_email))
                .cloned()
                .collect()
        };

        matching
            .into_iter()
            .map(|application| -> Result<EnrichedApplication> {
                let job = match application.document.job_id().map(str::parse::<Uuid>) {
                    Some(Ok(job_id)) => self.jobs.find_document(job_id)?,
                    _ => None,
                };
                Ok(EnrichedApplication::new(application, job.as_ref()))
            })
            .collect()
    }

    async fn list_applications_for_job(&self, job_id: &str) -> Result<Vec<Application>> {
        let applications = self.applications.lock().map_err(poisoned)?;
        Ok(applications
            .iter()
            .filter(|app| app.document.job_id() == Some(job_id))
            .cloned()
            .collect())
    }

    async fn create_application(
        &self,
        document: ApplicationDocument,
        mode: ApplicationCountMode,
    ) -> Result<InsertAck> {
        let job_id = document.referenced_job()?;

        // Held across the counter bump so a failure to store cannot leave
        // the count raised
        let mut applications = self.applications.lock().map_err(poisoned)?;
        if !self.jobs.bump_application_count(job_id, mode)? {
            return Err(Error::NotFound(format!("Job {job_id} not found")));
        }

        let id = Uuid::new_v4();
        applications.push(Application {
            id,
            document: document.into_insertable(job_id),
        });
        Ok(InsertAck::new(id))
    }

    async fn delete_application(&self, id: Uuid) -> Result<DeleteAck> {
        let mut applications = self.applications.lock().map_err(poisoned)?;
        let before = applications.len();
        applications.retain(|app| app.id != id);
        Ok(DeleteAck::new((before - applications.len()) as u64))
    }

    async fn update_application_status(&self, id: Uuid, status: &str) -> Result<UpdateAck> {
        let mut applications = self.applications.lock().map_err(poisoned)?;
        let Some(application) = applications.iter_mut().find(|app| app.id == id) else {
            return Ok(UpdateAck::new(0, 0));
        };

        if application.document.status().and_then(|value| value.as_str()) == Some(status) {
            return Ok(UpdateAck::new(1, 0));
        }
        application.document.set_status(status);
        Ok(UpdateAck::new(1, 1))
    }
}
