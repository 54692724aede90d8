//! Shared utilities, configuration, and error handling for the job board
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Store write acknowledgements and database bootstrapping
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{ApplicationCountMode, Config, RuntimeEnvironment, StoreProvider};
pub use db::{DeleteAck, InsertAck, UpdateAck};
pub use error::{Error, Result};
pub use extractors::{JsonBody, ValidatedJson};
