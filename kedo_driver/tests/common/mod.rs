use ::kedo_common::{error::Result, types::DriverOptions};
use ::kedo_driver::{provider::ClusterProvider, state::State};
use ::mockall::mock;

mock! {
    pub Provider {}
    impl ClusterProvider for Provider {
        async fn create_cluster(&self, state: &State) -> Result<String>;
    }
}

/// Provider whose calls never complete.
pub struct PendingProvider;

impl ClusterProvider for PendingProvider {
    async fn create_cluster(&self, _state: &State) -> Result<String> {
        ::std::future::pending().await
    }
}

pub fn create_options() -> DriverOptions {
    DriverOptions::default()
        .with_string("token", "secret")
        .with_string("name", "prod")
        .with_string("region-slug", "nyc1")
        .with_string("version-slug", "1.31.1-do.0")
        .with_string("node-pool-name", "workers")
        .with_string("node-pool-size", "s-2vcpu-4gb")
        .with_int("node-pool-count", 3)
        .with_bool("node-pool-autoscale", true)
        .with_int("node-pool-min", 2)
        .with_int("node-pool-max", 5)
        .with_string_slice("node-pool-labels", ["env=prod", "broken"])
}
