//! Lifecycle interface called by the kontainer-engine host.

use ::core::future::Future;

use ::kedo_common::{
    anyhow::anyhow,
    error::{DriverError, Result},
    tracing::debug,
    types::{
        Capabilities, ClusterInfo, DriverFlags, DriverOptions, K8sCapabilities,
        KubernetesVersion, NodeCount,
    },
};

use crate::{options::create_options, provider::ClusterProvider, state::State};

/// Lifecycle methods a cluster driver exposes to the host.
///
/// Methods returning `Ok(None)` or `Ok(())` without touching the cluster signal
/// that the driver does not support the operation. Hosts must not read that as a
/// successful change.
pub trait ClusterDriver: Send + Sync + 'static {
    /// Options accepted by [ClusterDriver::create].
    fn get_driver_create_options(
        &self,
    ) -> impl Future<Output = Result<Option<DriverFlags>>> + Send;

    /// Options accepted by [ClusterDriver::update].
    fn get_driver_update_options(
        &self,
    ) -> impl Future<Output = Result<Option<DriverFlags>>> + Send;

    /// Provision a cluster and return `info` updated with the driver's bookkeeping.
    fn create(
        &self,
        options: &DriverOptions,
        info: &ClusterInfo,
    ) -> impl Future<Output = Result<ClusterInfo>> + Send;

    fn post_check(
        &self,
        info: &ClusterInfo,
    ) -> impl Future<Output = Result<Option<ClusterInfo>>> + Send;

    fn update(
        &self,
        info: &ClusterInfo,
        options: &DriverOptions,
    ) -> impl Future<Output = Result<Option<ClusterInfo>>> + Send;

    fn remove(&self, info: &ClusterInfo) -> impl Future<Output = Result<()>> + Send;

    fn get_version(
        &self,
        info: &ClusterInfo,
    ) -> impl Future<Output = Result<Option<KubernetesVersion>>> + Send;

    fn set_version(
        &self,
        info: &ClusterInfo,
        version: &KubernetesVersion,
    ) -> impl Future<Output = Result<()>> + Send;

    fn get_cluster_size(
        &self,
        info: &ClusterInfo,
    ) -> impl Future<Output = Result<Option<NodeCount>>> + Send;

    fn set_cluster_size(
        &self,
        info: &ClusterInfo,
        count: &NodeCount,
    ) -> impl Future<Output = Result<()>> + Send;

    fn get_capabilities(&self) -> impl Future<Output = Result<Option<Capabilities>>> + Send;

    fn get_k8s_capabilities(
        &self,
        options: &DriverOptions,
    ) -> impl Future<Output = Result<Option<K8sCapabilities>>> + Send;

    fn remove_legacy_service_account(
        &self,
        info: &ClusterInfo,
    ) -> impl Future<Output = Result<()>> + Send;

    fn etcd_save(
        &self,
        info: &ClusterInfo,
        options: &DriverOptions,
        snapshot_name: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    fn etcd_restore(
        &self,
        info: &ClusterInfo,
        options: &DriverOptions,
        snapshot_name: &str,
    ) -> impl Future<Output = Result<Option<ClusterInfo>>> + Send;

    fn etcd_remove_snapshot(
        &self,
        info: &ClusterInfo,
        options: &DriverOptions,
        snapshot_name: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Driver provisioning DigitalOcean Kubernetes clusters.
///
/// Only cluster creation is supported; every other lifecycle method is a no-op.
pub struct DigitalOceanDriver<P> {
    provider: P,
}

impl<P: ClusterProvider> DigitalOceanDriver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

fn unsupported(operation: &str) {
    debug!("DigitalOcean driver does not support {}, skipping", operation);
}

impl<P: ClusterProvider> ClusterDriver for DigitalOceanDriver<P> {
    async fn get_driver_create_options(&self) -> Result<Option<DriverFlags>> {
        debug!("DigitalOcean driver: get_driver_create_options called");
        Ok(Some(create_options()))
    }

    async fn get_driver_update_options(&self) -> Result<Option<DriverFlags>> {
        unsupported("get_driver_update_options");
        Ok(None)
    }

    /// The caller's `info` is left untouched; on success the returned copy carries
    /// the saved state. Nothing is saved if any step fails or the future is dropped.
    async fn create(&self, options: &DriverOptions, info: &ClusterInfo) -> Result<ClusterInfo> {
        debug!("DigitalOcean driver: create called");
        let mut state = State::from_options(options).inspect_err(|e| {
            debug!("Error building state: {}", e);
        })?;

        if state.token.is_empty() {
            let err = DriverError::missing_credential(anyhow!("token was not reported"));
            debug!("Error token not found: {}", err);
            return Err(err);
        }

        debug!("Creating cluster from state {:?}", state);
        let cluster_id = self
            .provider
            .create_cluster(&state)
            .await
            .inspect_err(|e| debug!("Error creating cluster: {}", e))?;
        state.cluster_id = cluster_id;

        let mut info = info.clone();
        state
            .save(&mut info)
            .inspect_err(|e| debug!("Error saving state: {}", e))?;
        debug!("Cluster {} created", state.cluster_id);
        Ok(info)
    }

    async fn post_check(&self, _info: &ClusterInfo) -> Result<Option<ClusterInfo>> {
        unsupported("post_check");
        Ok(None)
    }

    async fn update(
        &self,
        _info: &ClusterInfo,
        _options: &DriverOptions,
    ) -> Result<Option<ClusterInfo>> {
        unsupported("update");
        Ok(None)
    }

    async fn remove(&self, _info: &ClusterInfo) -> Result<()> {
        unsupported("remove");
        Ok(())
    }

    async fn get_version(&self, _info: &ClusterInfo) -> Result<Option<KubernetesVersion>> {
        unsupported("get_version");
        Ok(None)
    }

    async fn set_version(&self, _info: &ClusterInfo, _version: &KubernetesVersion) -> Result<()> {
        unsupported("set_version");
        Ok(())
    }

    async fn get_cluster_size(&self, _info: &ClusterInfo) -> Result<Option<NodeCount>> {
        unsupported("get_cluster_size");
        Ok(None)
    }

    async fn set_cluster_size(&self, _info: &ClusterInfo, _count: &NodeCount) -> Result<()> {
        unsupported("set_cluster_size");
        Ok(())
    }

    async fn get_capabilities(&self) -> Result<Option<Capabilities>> {
        unsupported("get_capabilities");
        Ok(None)
    }

    async fn get_k8s_capabilities(
        &self,
        _options: &DriverOptions,
    ) -> Result<Option<K8sCapabilities>> {
        unsupported("get_k8s_capabilities");
        Ok(None)
    }

    async fn remove_legacy_service_account(&self, _info: &ClusterInfo) -> Result<()> {
        unsupported("remove_legacy_service_account");
        Ok(())
    }

    async fn etcd_save(
        &self,
        _info: &ClusterInfo,
        _options: &DriverOptions,
        _snapshot_name: &str,
    ) -> Result<()> {
        unsupported("etcd_save");
        Ok(())
    }

    async fn etcd_restore(
        &self,
        _info: &ClusterInfo,
        _options: &DriverOptions,
        _snapshot_name: &str,
    ) -> Result<Option<ClusterInfo>> {
        unsupported("etcd_restore");
        Ok(None)
    }

    async fn etcd_remove_snapshot(
        &self,
        _info: &ClusterInfo,
        _options: &DriverOptions,
        _snapshot_name: &str,
    ) -> Result<()> {
        unsupported("etcd_remove_snapshot");
        Ok(())
    }
}
