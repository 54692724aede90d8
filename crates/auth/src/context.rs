//! Authenticated session context

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::claims::SessionClaims;

/// Identity decoded from a valid session token
#[derive(Debug, Clone, PartialEq)]
pub struct SessionIdentity {
    pub email: String,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub identity: Map<String, Value>,
}

impl SessionIdentity {
    /// Whether this session may read resources owned by `email`
    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }
}

impl From<SessionClaims> for SessionIdentity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            email: claims.email,
            issued_at: DateTime::from_timestamp(claims.iat as i64, 0),
            expires_at: DateTime::from_timestamp(claims.exp as i64, 0),
            identity: claims.identity,
        }
    }
}
