//! Job posting API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use jobboard_common::{InsertAck, JsonBody, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, JobDocument, JobFilter};

/// Query parameters for listing jobs
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsParams {
    /// HR email to filter by; empty means no filter
    pub email: Option<String>,
}

impl ListJobsParams {
    fn filter(&self) -> JobFilter {
        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => JobFilter::by_hr_email(email),
            _ => JobFilter::default(),
        }
    }
}

/// List jobs, optionally only those posted by one HR email
pub async fn list_jobs(
    State(state): State<JobsState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<Vec<Job>>> {
    let jobs = state.store.list_jobs(&params.filter()).await?;
    Ok(Json(jobs))
}

/// Store a new job posting as submitted
pub async fn create_job(
    State(state): State<JobsState>,
    JsonBody(document): JsonBody<JobDocument>,
) -> Result<Json<InsertAck>> {
    let ack = state.store.create_job(document).await?;
    Ok(Json(ack))
}

/// Get a single job by ID. An unknown ID yields `null`, not an error.
pub async fn get_job(
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Job>>> {
    let job = state.store.get_job(id).await?;
    if job.is_none() {
        tracing::debug!(job_id = %id, "Job lookup found nothing");
    }
    Ok(Json(job))
}
