//! Domain layer for Applications

pub mod entities;
