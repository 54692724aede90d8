//! Session token signing and validation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign the submitted identity into a session token
pub(crate) fn issue_token(
    identity: Map<String, Value>,
    config: &AuthConfig,
) -> Result<(String, SessionClaims), AuthError> {
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    let claims = SessionClaims::from_identity(identity, now, now + config.token_ttl_secs)
        .ok_or(AuthError::MissingEmail)?;

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    let token = encode(&header, &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })?;

    Ok((token, claims))
}

/// Validate a session token's signature and expiry
pub(crate) fn validate_token(token: &str, config: &AuthConfig) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}
