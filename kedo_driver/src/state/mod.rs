//! Persisted configuration of one cluster.
//!
//! A [State] is built from the host options on create, and persisted as JSON in
//! the metadata of the host's [ClusterInfo](kedo_common::types::ClusterInfo)
//! under [STATE_METADATA_KEY]. That metadata entry is the only durable record
//! of the cluster; later calls rebuild the state from it.

mod builder;
mod persist;

use ::std::{collections::BTreeMap, fmt};

use ::kedo_common::serde::{Deserialize, Serialize};

/// Metadata key of the serialized state in the cluster-info record.
pub const STATE_METADATA_KEY: &str = "state";

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(crate = "kedo_common::serde")]
pub struct State {
    /// Assigned by DigitalOcean once the cluster is created.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// `None` leaves the choice to DigitalOcean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region_slug: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_slug: String,
    #[serde(default)]
    pub node_pool: NodePool,
}

/// The token is a secret, so it never shows up in logs.
impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("State")
            .field("cluster_id", &self.cluster_id)
            .field("token", &token)
            .field("display_name", &self.display_name)
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("auto_upgrade", &self.auto_upgrade)
            .field("region_slug", &self.region_slug)
            .field("vpc_id", &self.vpc_id)
            .field("version_slug", &self.version_slug)
            .field("node_pool", &self.node_pool)
            .finish()
    }
}

/// Sizing and scaling of the worker pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(crate = "kedo_common::serde")]
#[serde(from = "NodePoolRecord", into = "NodePoolRecord")]
pub struct NodePool {
    pub name: String,
    /// Droplet size slug of every node.
    pub size: String,
    pub count: u32,
    pub tags: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub autoscale: Autoscale,
}

/// Auto-scaling setting of a node pool.
/// The node bounds only exist when auto-scaling is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Autoscale {
    #[default]
    Unset,
    Disabled,
    Enabled { min_nodes: u32, max_nodes: u32 },
}

impl Autoscale {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    /// The tri-state flag as stored in JSON.
    pub fn flag(&self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Disabled => Some(false),
            Self::Enabled { .. } => Some(true),
        }
    }

    /// `(min_nodes, max_nodes)` when auto-scaling is enabled.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        match self {
            Self::Enabled {
                min_nodes,
                max_nodes,
            } => Some((*min_nodes, *max_nodes)),
            _ => None,
        }
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// Flat JSON layout of [NodePool].
#[derive(Serialize, Deserialize)]
#[serde(crate = "kedo_common::serde")]
struct NodePoolRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    size: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto_scale: Option<bool>,
    #[serde(default, skip_serializing_if = "is_zero")]
    min_nodes: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    max_nodes: u32,
}

impl From<NodePoolRecord> for NodePool {
    fn from(record: NodePoolRecord) -> Self {
        let autoscale = match record.auto_scale {
            None => Autoscale::Unset,
            Some(false) => Autoscale::Disabled,
            Some(true) => Autoscale::Enabled {
                min_nodes: record.min_nodes,
                max_nodes: record.max_nodes,
            },
        };
        Self {
            name: record.name,
            size: record.size,
            count: record.count,
            tags: record.tags,
            labels: record.labels,
            autoscale,
        }
    }
}

impl From<NodePool> for NodePoolRecord {
    fn from(pool: NodePool) -> Self {
        let (min_nodes, max_nodes) = pool.autoscale.bounds().unwrap_or_default();
        Self {
            name: pool.name,
            size: pool.size,
            count: pool.count,
            tags: pool.tags,
            labels: pool.labels,
            auto_scale: pool.autoscale.flag(),
            min_nodes,
            max_nodes,
        }
    }
}
