use ::std::collections::BTreeMap;

use ::kedo_common::{
    anyhow::anyhow,
    error::{DriverError, Result},
    tracing::warn,
    types::DriverOptions,
};

use super::{Autoscale, NodePool, State};
use crate::options::*;

impl State {
    /// Build the state of a new cluster from the options supplied by the host.
    ///
    /// Missing options take their zero value. The node bounds are only read when
    /// auto-scaling is enabled; otherwise any supplied bounds are ignored.
    /// This does not check that the token is present.
    ///
    /// # Errors
    /// [DriverError] of type `IllegalOption` if a node count is negative or does
    /// not fit in a `u32`.
    pub fn from_options(options: &DriverOptions) -> Result<Self> {
        let string = |keys: &[&str]| options.get_string(keys).unwrap_or_default().to_owned();

        let autoscale = match options.get_bool(NODE_POOL_AUTOSCALE) {
            None => Autoscale::Unset,
            Some(false) => Autoscale::Disabled,
            Some(true) => Autoscale::Enabled {
                min_nodes: node_count(options, NODE_POOL_MIN)?,
                max_nodes: node_count(options, NODE_POOL_MAX)?,
            },
        };

        Ok(Self {
            cluster_id: String::new(),
            token: string(TOKEN),
            display_name: string(DISPLAY_NAME),
            name: string(NAME),
            tags: options
                .get_string_slice(TAGS)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            auto_upgrade: options.get_bool(AUTO_UPGRADED),
            region_slug: string(REGION_SLUG),
            vpc_id: string(VPC_ID),
            version_slug: string(VERSION_SLUG),
            node_pool: NodePool {
                name: string(NODE_POOL_NAME),
                size: string(NODE_POOL_SIZE),
                count: node_count(options, NODE_POOL_COUNT)?,
                tags: vec![],
                labels: parse_labels(
                    options
                        .get_string_slice(NODE_POOL_LABELS)
                        .unwrap_or_default(),
                ),
                autoscale,
            },
        })
    }
}

fn node_count(options: &DriverOptions, keys: &[&str]) -> Result<u32> {
    let value = options.get_int(keys).unwrap_or_default();
    u32::try_from(value).map_err(|_| {
        DriverError::illegal_option(anyhow!(
            "Option {} must be a non-negative node count, got {}.",
            keys[0],
            value
        ))
    })
}

/// Parse `key=value` tokens into a label map.
/// Tokens that do not contain exactly one `=` are dropped.
fn parse_labels(tokens: &[String]) -> BTreeMap<String, String> {
    tokens
        .iter()
        .filter_map(|token| {
            let mut parts = token.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => Some((key.to_owned(), value.to_owned())),
                _ => {
                    warn!("Drop malformed node pool label {:?}, expected key=value", token);
                    None
                }
            }
        })
        .collect()
}
