//! Common types and utilities for the kedo driver crates.

pub mod config;
pub mod error;
pub mod types;

pub use ::anyhow;
pub use ::clap;
pub use ::serde;
pub use ::serde_json;
pub use ::time;
pub use ::tokio;
pub use ::tracing;
pub use ::tracing_subscriber;
