//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use axum_extra::extract::CookieJar;

use crate::config::AuthConfig;
use crate::context::SessionIdentity;
use crate::cookie::SESSION_COOKIE;
use crate::error::AuthError;
use crate::jwt::validate_token;

/// Resolve the session carried by the request's cookies
pub(crate) fn authenticate_headers(
    headers: &HeaderMap,
    config: &AuthConfig,
) -> Result<SessionIdentity, AuthError> {
    let jar = CookieJar::from_headers(headers);
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = validate_token(token, config)?;
    Ok(SessionIdentity::from(claims))
}

/// Authenticated session extractor (cookie JWT)
#[derive(Debug)]
pub struct SessionUser(pub SessionIdentity);

impl<S> FromRequestParts<S> for SessionUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        // Reuse an identity already attached by `require_session`
        if let Some(identity) = parts.extensions.get::<SessionIdentity>() {
            return Ok(SessionUser(identity.clone()));
        }

        let config = AuthConfig::from_ref(state);
        let identity = authenticate_headers(&parts.headers, &config)?;
        Ok(SessionUser(identity))
    }
}
