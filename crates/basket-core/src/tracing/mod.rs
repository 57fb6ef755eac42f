//! Tracing initialization for the basket engine.

pub mod setup;

pub use setup::init_tracing;
