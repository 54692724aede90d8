//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    MissingEmail,
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::MissingEmail => StatusCode::BAD_REQUEST,
            AuthError::TokenIssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken | AuthError::InvalidToken => "Unauthorized access",
            AuthError::MissingEmail => "Identity must include an email",
            AuthError::TokenIssueFailed => "Failed to issue session token",
        };

        (self.status_code(), Json(json!({ "message": message }))).into_response()
    }
}
