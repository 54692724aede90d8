//! Application domain entities
//!
//! Applications, like jobs, are stored exactly as submitted. The store only
//! reads `jobId`, `applicant_email` and `status`.

use jobboard_common::{Error, Result};
use jobboard_jobs::{JobDocument, ID_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

/// Job fields copied onto an application when it is listed for its applicant
pub const ENRICHED_FIELDS: [&str; 6] = [
    "title",
    "company_logo",
    "company",
    "location",
    "jobType",
    "category",
];

pub const JOB_ID_FIELD: &str = "jobId";
pub const APPLICANT_EMAIL_FIELD: &str = "applicant_email";
pub const STATUS_FIELD: &str = "status";

/// Application document as submitted and stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationDocument(Map<String, Value>);

impl ApplicationDocument {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Identifier of the job applied to, when it is a string
    pub fn job_id(&self) -> Option<&str> {
        self.0.get(JOB_ID_FIELD).and_then(Value::as_str)
    }

    pub fn applicant_email(&self) -> Option<&str> {
        self.0.get(APPLICANT_EMAIL_FIELD).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&Value> {
        self.0.get(STATUS_FIELD)
    }

    pub fn set_status(&mut self, status: &str) {
        self.0
            .insert(STATUS_FIELD.to_string(), Value::from(status));
    }

    /// Resolve the referenced job.
    ///
    /// A missing, `null` or blank `jobId` is a client error. Any other value
    /// that cannot be a job identifier can never match a job, so it reports
    /// the same as an unknown job.
    pub fn referenced_job(&self) -> Result<Uuid> {
        let missing = || Error::Validation("jobId is required".to_string());
        match self.0.get(JOB_ID_FIELD) {
            None | Some(Value::Null) => Err(missing()),
            Some(Value::String(raw)) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(missing());
                }
                raw.parse::<Uuid>()
                    .map_err(|_| Error::NotFound(format!("Job {raw} not found")))
            }
            Some(other) => Err(Error::NotFound(format!("Job {other} not found"))),
        }
    }

    /// Prepare for storage: the store owns `_id`, and `jobId` is kept in
    /// the canonical form job identifiers are issued in.
    pub fn into_insertable(mut self, job_id: Uuid) -> Self {
        self.0.remove(ID_FIELD);
        self.0
            .insert(JOB_ID_FIELD.to_string(), Value::from(job_id.to_string()));
        self
    }

    fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }
}

/// Stored application: generated identifier plus document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub document: ApplicationDocument,
}

/// Job metadata shown alongside an application: whichever of the
/// enriched fields the job carries, with their values as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JobSummary(Map<String, Value>);

impl JobSummary {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<&JobDocument> for JobSummary {
    fn from(job: &JobDocument) -> Self {
        Self(
            ENRICHED_FIELDS
                .iter()
                .filter_map(|field| {
                    job.get(field)
                        .map(|value| (field.to_string(), value.clone()))
                })
                .collect(),
        )
    }
}

/// Application as listed for its applicant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedApplication {
    #[serde(flatten)]
    pub application: Application,
    #[serde(flatten)]
    pub job: Option<JobSummary>,
}

impl EnrichedApplication {
    /// Attach the referenced job's metadata, if the job exists.
    ///
    /// Job values replace same-named application fields; a field the job
    /// lacks is dropped from the application rather than left stale.
    pub fn new(mut application: Application, job: Option<&JobDocument>) -> Self {
        let job = job.map(|job| {
            for field in ENRICHED_FIELDS {
                application.document.remove(field);
            }
            JobSummary::from(job)
        });
        Self { application, job }
    }
}

/// Request body for `PATCH /job-application/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct StatusUpdateRequest {
    #[validate(length(min = 1, max = 64, message = "status must be 1-64 characters"))]
    pub status: String,
}
