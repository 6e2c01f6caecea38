//! Cluster collaborators for the dnsweep resolver audit.
//!
//! Native Kubernetes API access through kube-rs: building the shared cluster
//! client, enumerating host-network pods into audit [`Target`]s, and
//! [`KubeExec`], the production executor that drives the pod `exec`
//! subresource.
//!
//! [`Target`]: dnsweep_audit::Target

pub mod cluster;
pub mod error;
pub mod exec;
pub mod prelude;

pub use cluster::{connect, list_host_network_targets};
pub use exec::KubeExec;
