//! API layer for the Applications domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ApplicationsState;
pub use routes::routes;
