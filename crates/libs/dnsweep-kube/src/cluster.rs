//! Cluster client construction and target enumeration.

use crate::prelude::*;
use dnsweep_audit::Target;
use dnsweep_config::ContainerPolicy;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    Client,
    api::{Api, ListParams},
};
use tracing::{info, warn};

/// Build the shared cluster client from the local environment
/// (kubeconfig or in-cluster service account).
pub async fn connect() -> Result<Client> {
    Client::try_default().await.map_err(Error::ClientSetup)
}

/// Enumerate every host-network pod in the cluster as an audit target.
///
/// One-shot call producing the full bounded target set before the fan-out
/// begins. Only Running pods are kept; the diagnostic container is resolved
/// per `policy`.
pub async fn list_host_network_targets(
    client: Client,
    policy: &ContainerPolicy,
) -> Result<Vec<Target>> {
    info!("listing host-network pods; only Running pods are audited");
    let pods: Api<Pod> = Api::all(client);
    let list = pods
        .list(&ListParams::default())
        .await
        .map_err(Error::Enumeration)?;

    let targets: Vec<Target> = list
        .items
        .iter()
        .filter_map(|pod| target_from_pod(pod, policy))
        .collect();

    info!(targets = targets.len(), "host-network pod enumeration done");
    Ok(targets)
}

/// Convert one pod into a target, or skip it.
///
/// Skips pods that are not host-network, not Running, missing identifying
/// metadata, or (under a named-container policy) missing the named container.
fn target_from_pod(pod: &Pod, policy: &ContainerPolicy) -> Option<Target> {
    let spec = pod.spec.as_ref()?;
    if spec.host_network != Some(true) {
        return None;
    }
    if pod.status.as_ref()?.phase.as_deref() != Some("Running") {
        return None;
    }

    let namespace = pod.metadata.namespace.clone()?;
    let name = pod.metadata.name.clone()?;
    let container = match policy {
        // First declared container, the documented default policy.
        ContainerPolicy::FirstDeclared => spec.containers.first()?.name.clone(),
        ContainerPolicy::Named(wanted) => {
            if spec.containers.iter().any(|c| &c.name == wanted) {
                wanted.clone()
            } else {
                warn!(
                    namespace = %namespace,
                    pod = %name,
                    container = %wanted,
                    "pod has no container with the configured name, skipping"
                );
                return None;
            }
        }
    };

    Some(Target::new(namespace, name, container))
}
