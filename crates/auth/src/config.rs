//! Authentication configuration

use axum_extra::extract::cookie::SameSite;
use jobboard_common::RuntimeEnvironment;

/// Session tokens expire one hour after issuance
pub const SESSION_TTL_SECS: u64 = 60 * 60;

/// Flags applied to the session cookie. Issuance and removal must use the
/// same policy or browsers keep the old cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookiePolicy {
    /// Cross-site cookie in production (the frontend is hosted elsewhere),
    /// strict same-site everywhere else.
    pub fn for_environment(environment: RuntimeEnvironment) -> Self {
        if environment.is_production() {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }
}

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub cookie: CookiePolicy,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, environment: RuntimeEnvironment) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: SESSION_TTL_SECS,
            cookie: CookiePolicy::for_environment(environment),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("cookie", &self.cookie)
            .finish()
    }
}
