//! Requests and responses of the `/v2/kubernetes` endpoints.

use ::std::{collections::BTreeMap, time::Duration};

use ::kedo_common::{
    serde::{Deserialize, Serialize},
    time::OffsetDateTime,
};

type Result<T> = std::result::Result<T, reqwest::Error>;

/// Request body to create a Kubernetes cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(crate = "kedo_common::serde")]
pub struct CreateClusterRequest {
    pub name: String,
    pub region: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade: Option<bool>,
    pub node_pools: Vec<NodePoolRequest>,
}

/// Worker pool of a cluster creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(crate = "kedo_common::serde")]
pub struct NodePoolRequest {
    pub name: String,
    pub size: String,
    pub count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_nodes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(crate = "kedo_common::serde")]
pub struct ClusterStatus {
    pub state: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// A Kubernetes cluster as reported by DigitalOcean.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(crate = "kedo_common::serde")]
pub struct KubernetesCluster {
    pub id: String,
    pub name: String,
    pub region: String,
    pub version: String,
    #[serde(default)]
    pub vpc_uuid: String,
    pub status: ClusterStatus,
    #[serde(with = "kedo_common::time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Deserialize)]
#[serde(crate = "kedo_common::serde")]
struct KubernetesClusterResponse {
    kubernetes_cluster: KubernetesCluster,
}

/// Client authenticated with one API token.
pub struct DigitalOceanClient<'a> {
    /// Base URL of the DigitalOcean API, without trailing slash.
    base_url: &'a str,
    token: &'a str,
    client: reqwest::Client,
}

impl<'a> DigitalOceanClient<'a> {
    /// Create a client. `timeout` bounds every request sent by it.
    pub fn new(base_url: &'a str, token: &'a str, timeout: Option<Duration>) -> Result<Self> {
        let builder = reqwest::Client::builder();
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            base_url,
            token,
            client: builder.build()?,
        })
    }

    pub async fn create_cluster(
        &self,
        request: &CreateClusterRequest,
    ) -> Result<KubernetesCluster> {
        let url = self.build_url("/v2/kubernetes/clusters");
        let response: KubernetesClusterResponse = self
            .client
            .post(url)
            .bearer_auth(self.token)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.kubernetes_cluster)
    }

    fn build_url(&self, path: &str) -> String {
        self.base_url.trim_end_matches('/').to_owned() + path
    }
}
