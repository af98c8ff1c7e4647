use ::std::time::Duration;

use ::kedo_client::DIGITALOCEAN_API_URL;
use ::kedo_common::serde::Deserialize;

/// Configuration of the driver binary
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[serde(crate = "kedo_common::serde")]
pub struct DriverConfig {
    /// Base URL of the DigitalOcean API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Timeout in second of every request sent to DigitalOcean.
    /// No timeout if absent.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl DriverConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_api_base_url() -> String {
    DIGITALOCEAN_API_URL.to_owned()
}
