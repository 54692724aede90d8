//! HTTP handlers for the Applications domain

pub mod applications;
