use ::std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};

/// Host-owned description of a cluster.
///
/// Drivers keep their own bookkeeping in `metadata`, which the host persists
/// and hands back on every later call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterInfo {
    pub version: String,
    pub service_account_token: String,
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub root_ca_certificate: String,
    pub client_certificate: String,
    pub client_key: String,
    pub node_count: i64,
    pub status: String,
    pub metadata: BTreeMap<String, String>,
}
