//! Client of the DigitalOcean Kubernetes API.

pub mod kubernetes;

pub use kubernetes::DigitalOceanClient;

/// Public endpoint of the DigitalOcean API.
pub const DIGITALOCEAN_API_URL: &str = "https://api.digitalocean.com";
