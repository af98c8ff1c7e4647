//! Records exchanged with the kontainer-engine host.

mod cluster_info;
mod driver_flags;
mod driver_options;
mod lifecycle;

pub use cluster_info::ClusterInfo;
pub use driver_flags::{DriverFlags, Flag, FlagType};
pub use driver_options::DriverOptions;
pub use lifecycle::{Capabilities, K8sCapabilities, KubernetesVersion, NodeCount};
