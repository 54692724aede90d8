//! Session guard middleware
//!
//! Attach with `axum::middleware::from_fn_with_state(config, require_session)`.
//! On success the decoded `SessionIdentity` is inserted into the request
//! extensions, where handlers read it via `Extension<SessionIdentity>` or
//! `SessionUser`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::extractors::authenticate_headers;

pub async fn require_session(
    State(config): State<AuthConfig>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticate_headers(request.headers(), &config).inspect_err(|e| {
        tracing::debug!(error = ?e, path = %request.uri().path(), "Session rejected");
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
