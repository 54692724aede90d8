//! Session issuance API handlers
//!
//! Implements:
//! - POST /jwt: sign the submitted identity and set the session cookie
//! - POST /logout: clear the session cookie

use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use axum_extra::extract::CookieJar;
use jobboard_common::JsonBody;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::AuthConfig;
use crate::cookie::{removal_cookie, session_cookie};
use crate::error::AuthError;
use crate::jwt::issue_token;

/// Acknowledgement body for session operations
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// POST /jwt: issue a session cookie for the given identity
pub async fn issue_session(
    State(config): State<AuthConfig>,
    jar: CookieJar,
    JsonBody(identity): JsonBody<Map<String, Value>>,
) -> Result<(CookieJar, Json<SessionResponse>), AuthError> {
    let (token, claims) = issue_token(identity, &config)?;
    tracing::info!(email = %claims.email, "Session issued");

    Ok((
        jar.add(session_cookie(token, &config.cookie)),
        Json(SessionResponse { success: true }),
    ))
}

/// POST /logout: clear the session cookie
pub async fn revoke_session(
    State(config): State<AuthConfig>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    (
        jar.add(removal_cookie(&config.cookie)),
        Json(SessionResponse { success: true }),
    )
}

/// Session routes, mountable on any state that exposes `AuthConfig`
pub fn routes<S>() -> Router<S>
where
    AuthConfig: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/jwt", post(issue_session))
        .route("/logout", post(revoke_session))
}
