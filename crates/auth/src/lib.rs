//! Session authentication for the job board API
//!
//! Issues and clears the signed `token` cookie, and provides the guard
//! middleware and axum extractors that work with any state implementing
//! `FromRef<S>` for `AuthConfig`.

mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod handlers;
mod jwt;
mod middleware;

pub use claims::SessionClaims;
pub use config::{AuthConfig, CookiePolicy, SESSION_TTL_SECS};
pub use context::SessionIdentity;
pub use cookie::SESSION_COOKIE;
pub use error::AuthError;
pub use extractors::SessionUser;
pub use handlers::{issue_session, revoke_session, routes, SessionResponse};
pub use middleware::require_session;
