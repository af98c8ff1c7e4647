use ::std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesVersion {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCount {
    pub count: i64,
}

/// Driver capabilities, keyed by the host's capability number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub capabilities: BTreeMap<i64, bool>,
}

/// Features of the Kubernetes clusters a driver provisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct K8sCapabilities {
    pub l4_load_balancer_enabled: bool,
    pub ingress_controllers: Vec<String>,
    pub node_pool_scaling_supported: bool,
}
