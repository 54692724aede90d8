//! Route definitions for Applications domain API

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};
use jobboard_auth::require_session;

use super::handlers::applications;
use super::middleware::ApplicationsState;

/// Applicant listing, behind the session guard unless it is disabled
fn applicant_routes(state: &ApplicationsState) -> Router<ApplicationsState> {
    if state.require_applicant_auth {
        Router::new()
            .route(
                "/job-application",
                get(applications::list_own_applications),
            )
            .route_layer(from_fn_with_state(state.auth.clone(), require_session))
    } else {
        Router::new().route(
            "/job-application",
            get(applications::list_applications_by_email),
        )
    }
}

/// Create all Applications domain API routes
pub fn routes(state: &ApplicationsState) -> Router<ApplicationsState> {
    Router::new()
        .route("/job-applications", post(applications::create_application))
        .route(
            "/job-applications/{id}",
            delete(applications::delete_application),
        )
        .route(
            "/job-application/jobs/{job_id}",
            get(applications::list_applications_for_job),
        )
        .route(
            "/job-application/{id}",
            patch(applications::update_application_status),
        )
        .merge(applicant_routes(state))
}
