//! Cloud provider behind the driver.

use ::core::future::Future;
use ::std::time::Duration;

use ::kedo_client::{
    kubernetes::{CreateClusterRequest, NodePoolRequest},
    DigitalOceanClient,
};
use ::kedo_common::{
    error::{DriverError, Result},
    tracing::info,
};

use crate::state::State;

/// Provider of Kubernetes clusters.
pub trait ClusterProvider: Send + Sync + 'static {
    /// Create the cluster described by `state` and return its id.
    /// The request is authenticated with the token of `state`.
    fn create_cluster(&self, state: &State) -> impl Future<Output = Result<String>> + Send;
}

/// [ClusterProvider] backed by the DigitalOcean API.
pub struct DigitalOceanProvider {
    api_base_url: String,
    request_timeout: Option<Duration>,
}

impl DigitalOceanProvider {
    pub fn new(api_base_url: String, request_timeout: Option<Duration>) -> Self {
        Self {
            api_base_url,
            request_timeout,
        }
    }
}

impl ClusterProvider for DigitalOceanProvider {
    async fn create_cluster(&self, state: &State) -> Result<String> {
        let client = DigitalOceanClient::new(&self.api_base_url, &state.token, self.request_timeout)
            .map_err(DriverError::provider)?;
        let cluster = client
            .create_cluster(&CreateClusterRequest::from(state))
            .await
            .map_err(DriverError::provider)?;
        info!(
            "Cluster {} ({}) created at {}, status: {}",
            cluster.name, cluster.id, cluster.created_at, cluster.status.state
        );
        Ok(cluster.id)
    }
}

impl From<&State> for CreateClusterRequest {
    fn from(state: &State) -> Self {
        let pool = &state.node_pool;
        let bounds = pool.autoscale.bounds();
        let name = if state.name.is_empty() {
            &state.display_name
        } else {
            &state.name
        };
        Self {
            name: name.clone(),
            region: state.region_slug.clone(),
            version: state.version_slug.clone(),
            vpc_uuid: (!state.vpc_id.is_empty()).then(|| state.vpc_id.clone()),
            tags: state.tags.clone(),
            auto_upgrade: state.auto_upgrade,
            node_pools: vec![NodePoolRequest {
                name: pool.name.clone(),
                size: pool.size.clone(),
                count: pool.count,
                tags: pool.tags.clone(),
                labels: pool.labels.clone(),
                auto_scale: pool.autoscale.flag(),
                min_nodes: bounds.map(|(min, _)| min),
                max_nodes: bounds.map(|(_, max)| max),
            }],
        }
    }
}
