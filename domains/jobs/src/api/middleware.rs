//! Jobs domain state

use std::sync::Arc;

use crate::repository::JobStore;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub store: Arc<dyn JobStore>,
}

impl JobsState {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }
}
