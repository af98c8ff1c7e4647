//! Option names accepted by the driver and the descriptor advertised to the host.
//!
//! Each option is listed with its hyphenated name first, followed by the
//! camel-case alias older hosts send. The first name is the one advertised.

use ::kedo_common::types::{DriverFlags, Flag, FlagType};

pub const TOKEN: &[&str] = &["token"];
pub const DISPLAY_NAME: &[&str] = &["display-name", "displayName"];
pub const NAME: &[&str] = &["name"];
pub const TAGS: &[&str] = &["tags"];
pub const AUTO_UPGRADED: &[&str] = &["auto-upgraded", "autoUpgraded"];
pub const REGION_SLUG: &[&str] = &["region-slug", "regionSlug"];
pub const VPC_ID: &[&str] = &["vpc-id", "vpcID"];
pub const VERSION_SLUG: &[&str] = &["version-slug", "versionSlug"];
pub const NODE_POOL_NAME: &[&str] = &["node-pool-name", "nodePoolName"];
pub const NODE_POOL_AUTOSCALE: &[&str] = &["node-pool-autoscale", "nodePoolAutoscale"];
pub const NODE_POOL_MAX: &[&str] = &["node-pool-max", "nodePoolMax"];
pub const NODE_POOL_MIN: &[&str] = &["node-pool-min", "nodePoolMin"];
pub const NODE_POOL_COUNT: &[&str] = &["node-pool-count", "nodePoolCount"];
pub const NODE_POOL_LABELS: &[&str] = &["node-pool-labels", "nodePoolLabels"];
pub const NODE_POOL_SIZE: &[&str] = &["node-pool-size", "nodePoolSize"];

/// Build the descriptor of every option accepted by [`crate::driver::DigitalOceanDriver::create`].
pub fn create_options() -> DriverFlags {
    let flags = [
        (
            TOKEN,
            Flag::new(FlagType::String, "DigitalOcean API token").secret(),
        ),
        (
            DISPLAY_NAME,
            Flag::new(FlagType::String, "the name of the cluster shown in the UI"),
        ),
        (
            NAME,
            Flag::new(FlagType::String, "the name of the cluster in DigitalOcean"),
        ),
        (
            TAGS,
            Flag::new(FlagType::StringSlice, "tags applied to the cluster"),
        ),
        (
            AUTO_UPGRADED,
            Flag::new(
                FlagType::BoolPointer,
                "upgrade the cluster automatically to new patch releases",
            ),
        ),
        (
            REGION_SLUG,
            Flag::new(FlagType::String, "slug of the region to deploy the cluster in"),
        ),
        (
            VPC_ID,
            Flag::new(FlagType::String, "UUID of the VPC the cluster is attached to"),
        ),
        (
            VERSION_SLUG,
            Flag::new(FlagType::String, "slug of the Kubernetes version"),
        ),
        (
            NODE_POOL_NAME,
            Flag::new(FlagType::String, "the name of the node pool"),
        ),
        (
            NODE_POOL_AUTOSCALE,
            Flag::new(FlagType::BoolPointer, "enable auto-scaling of the node pool"),
        ),
        (
            NODE_POOL_MAX,
            Flag::new(
                FlagType::Int,
                "maximum number of nodes when auto-scaling is enabled",
            ),
        ),
        (
            NODE_POOL_MIN,
            Flag::new(
                FlagType::Int,
                "minimum number of nodes when auto-scaling is enabled",
            ),
        ),
        (
            NODE_POOL_COUNT,
            Flag::new(FlagType::Int, "number of nodes in the node pool"),
        ),
        (
            NODE_POOL_LABELS,
            Flag::new(
                FlagType::StringSlice,
                "labels applied to the nodes, in the form key=value",
            ),
        ),
        (
            NODE_POOL_SIZE,
            Flag::new(FlagType::String, "slug of the droplet size of the nodes"),
        ),
    ];

    DriverFlags {
        options: flags
            .into_iter()
            .map(|(keys, flag)| (keys[0].to_owned(), flag))
            .collect(),
    }
}
