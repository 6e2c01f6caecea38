//! Cluster access error types.
//!
//! Both variants are fatal to the whole run: they occur before any execution
//! task starts. Per-target execution failures are not errors at this level,
//! they travel inside `ExecOutcome`.

/// Cluster access errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Building the cluster client from the local environment failed.
    #[error("failed to build cluster client: {0}")]
    ClientSetup(#[source] kube::Error),

    /// Listing pods across the cluster failed.
    #[error("failed to list cluster pods: {0}")]
    Enumeration(#[source] kube::Error),
}
