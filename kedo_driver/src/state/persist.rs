use ::kedo_common::{
    anyhow::anyhow,
    error::{DriverError, Result},
    serde_json,
    types::ClusterInfo,
};

use super::{State, STATE_METADATA_KEY};

impl State {
    /// Write the state into the metadata of `cluster_info`,
    /// replacing any state saved before.
    pub fn save(&self, cluster_info: &mut ClusterInfo) -> Result<()> {
        let json = serde_json::to_string(self).map_err(|e| {
            DriverError::fail_to_serialize_state(anyhow!(e).context("could not marshal state"))
        })?;
        cluster_info
            .metadata
            .insert(STATE_METADATA_KEY.to_owned(), json);
        Ok(())
    }

    /// Rebuild the state saved in the metadata of `cluster_info`.
    pub fn from_cluster_info(cluster_info: &ClusterInfo) -> Result<Self> {
        let json = cluster_info
            .metadata
            .get(STATE_METADATA_KEY)
            .ok_or_else(|| {
                DriverError::state_not_found(anyhow!("There is no state in the cluster info."))
            })?;
        serde_json::from_str(json).map_err(DriverError::fail_to_deserialize_state)
    }
}
