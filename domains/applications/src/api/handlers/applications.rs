//! Job application API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use jobboard_auth::SessionUser;
use jobboard_common::{
    DeleteAck, Error, InsertAck, JsonBody, Result, UpdateAck, ValidatedJson,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::ApplicationsState;
use crate::domain::entities::{
    Application, ApplicationDocument, EnrichedApplication, StatusUpdateRequest,
};

/// Query parameters for the applicant listing
#[derive(Debug, Default, Deserialize)]
pub struct ApplicantQuery {
    pub email: Option<String>,
}

/// Submit an application and count it against its job
pub async fn create_application(
    State(state): State<ApplicationsState>,
    JsonBody(document): JsonBody<ApplicationDocument>,
) -> Result<Json<InsertAck>> {
    let ack = state
        .store
        .create_application(document, state.application_count_mode)
        .await?;
    Ok(Json(ack))
}

/// List the session owner's applications, enriched with job metadata.
/// The `email` query must name the authenticated user.
pub async fn list_own_applications(
    SessionUser(session): SessionUser,
    State(state): State<ApplicationsState>,
    Query(query): Query<ApplicantQuery>,
) -> Result<Json<Vec<EnrichedApplication>>> {
    let email = match query.email {
        Some(email) if session.owns(&email) => email,
        requested => {
            tracing::warn!(
                email = %session.email,
                requested = ?requested,
                "Applicant listing denied for another email"
            );
            return Err(Error::Authorization("forbidden access".to_string()));
        }
    };

    let applications = state.store.list_applications(&email).await?;
    Ok(Json(applications))
}

/// List an applicant's applications without a session check
pub async fn list_applications_by_email(
    State(state): State<ApplicationsState>,
    Query(query): Query<ApplicantQuery>,
) -> Result<Json<Vec<EnrichedApplication>>> {
    let email = query
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| Error::Validation("email query parameter is required".to_string()))?;

    let applications = state.store.list_applications(&email).await?;
    Ok(Json(applications))
}

/// List the raw applications submitted for one job
pub async fn list_applications_for_job(
    State(state): State<ApplicationsState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<Application>>> {
    let applications = state.store.list_applications_for_job(&job_id).await?;
    Ok(Json(applications))
}

/// Delete an application
pub async fn delete_application(
    State(state): State<ApplicationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteAck>> {
    let ack = state.store.delete_application(id).await?;
    Ok(Json(ack))
}

/// Change an application's status
pub async fn update_application_status(
    State(state): State<ApplicationsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<StatusUpdateRequest>,
) -> Result<Json<UpdateAck>> {
    let ack = state
        .store
        .update_application_status(id, &request.status)
        .await?;

    tracing::info!(
        application_id = %id,
        status = %request.status,
        modified = ack.modified_count,
        "Application status updated"
    );
    Ok(Json(ack))
}
