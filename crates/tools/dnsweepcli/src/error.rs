//! CLI error types.

/// CLI errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Loading or validating the run configuration failed.
    #[error(transparent)]
    Config(#[from] dnsweep_config::error::Error),

    /// Building the cluster client or enumerating pods failed.
    #[error(transparent)]
    Cluster(#[from] dnsweep_kube::error::Error),
}
