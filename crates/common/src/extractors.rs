//! Custom axum extractors for the job board

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// JSON body whose rejections use the common error body.
///
/// A missing content type, unreadable JSON or a body of the wrong shape is
/// `Error::Validation` (400) rather than axum's plain-text rejection. A body
/// cut off by the size limit stays a 413.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge(rejection.body_text()),
                _ => Error::Validation(rejection.body_text()),
            })?;
        Ok(JsonBody(value))
    }
}

/// JSON body that must also pass its `validator` rules.
///
/// Unreadable JSON and rule violations are both rejected as
/// `Error::Validation` (400).
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| Error::Validation(describe(&errors)))?;
        Ok(ValidatedJson(value))
    }
}

/// One `field: message` entry per failed rule, sorted by field
fn describe(errors: &ValidationErrors) -> String {
    let mut entries: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let reason = failure
                    .message
                    .as_deref()
                    .unwrap_or(failure.code.as_ref());
                format!("{field}: {reason}")
            })
        })
        .collect();
    entries.sort();
    entries.join("; ")
}
