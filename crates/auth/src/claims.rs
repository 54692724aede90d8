//! JWT claims types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by the session token.
///
/// `email` is the only field the server relies on. Whatever else the client
/// sent to `/jwt` is signed along with it and round-trips in `identity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Authenticated email
    pub email: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Remaining identity fields as submitted
    #[serde(flatten)]
    pub identity: Map<String, Value>,
}

impl SessionClaims {
    /// Build claims from a submitted identity payload.
    ///
    /// Returns `None` when the payload has no string `email`. Any `iat`/`exp`
    /// in the payload are discarded in favor of the server-assigned values.
    pub fn from_identity(mut identity: Map<String, Value>, iat: u64, exp: u64) -> Option<Self> {
        let email = match identity.remove("email") {
            Some(Value::String(email)) if !email.is_empty() => email,
            _ => return None,
        };
        identity.remove("iat");
        identity.remove("exp");

        Some(Self {
            email,
            iat,
            exp,
            identity,
        })
    }
}
