//! Session cookie construction

use axum_extra::extract::cookie::Cookie;

use crate::config::CookiePolicy;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Cookie carrying a freshly issued session token
pub(crate) fn session_cookie(token: String, policy: &CookiePolicy) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(policy.secure)
        .same_site(policy.same_site)
        .build()
}

/// Expired cookie that overwrites the session cookie. Built with the same
/// flags as `session_cookie` and always emitted, even when the request did
/// not carry a session.
pub(crate) fn removal_cookie(policy: &CookiePolicy) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), policy);
    cookie.make_removal();
    cookie
}
