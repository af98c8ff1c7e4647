//! kontainer-engine driver provisioning Kubernetes clusters on DigitalOcean.

pub mod config;
pub mod driver;
pub mod options;
pub mod provider;
pub mod state;
