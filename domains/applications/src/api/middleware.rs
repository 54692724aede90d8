//! Applications domain state and session guard integration

use std::sync::Arc;

use axum::extract::FromRef;
use jobboard_auth::AuthConfig;
use jobboard_common::ApplicationCountMode;

use crate::repository::ApplicationStore;

/// Application state for the Applications domain
#[derive(Clone)]
pub struct ApplicationsState {
    pub store: Arc<dyn ApplicationStore>,
    pub auth: AuthConfig,
    /// Guard the applicant listing with the session cookie
    pub require_applicant_auth: bool,
    pub application_count_mode: ApplicationCountMode,
}

impl FromRef<ApplicationsState> for AuthConfig {
    fn from_ref(state: &ApplicationsState) -> Self {
        state.auth.clone()
    }
}
