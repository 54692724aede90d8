//! Applications domain: job applications, enrichment from jobs, status updates

pub mod api;
pub mod domain;
pub mod mock;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use api::{routes, ApplicationsState};
pub use domain::entities::*;
pub use mock::InMemoryApplicationStore;
pub use repository::{ApplicationStore, PgApplicationStore};
