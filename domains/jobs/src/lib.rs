//! Jobs domain: job postings and their application counters

pub mod api;
pub mod domain;
pub mod mock;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use api::{routes, JobsState};
pub use domain::entities::*;
pub use mock::InMemoryJobStore;
pub use repository::{increment_application_count_tx, JobStore, PgJobStore};
