//! Core types, errors, config, and tracing setup for the basket mining engine.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
