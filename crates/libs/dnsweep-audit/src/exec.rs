//! Remote execution contract.

use crate::{outcome::ExecOutcome, target::Target};
use async_trait::async_trait;

/// Runs the diagnostic command inside one target's container.
///
/// Implementations encode failure in the returned [`ExecOutcome`] rather than
/// in a `Result`: the fan-out treats every terminated execution uniformly,
/// whether it produced output, failed outright, or both. The shared deadline
/// is imposed by the caller, which drops the in-flight future on expiry, so
/// implementations must not block in ways that survive cancellation.
///
/// `command` is non-empty by construction (enforced when the run
/// configuration is built). Implementations mutate no local state; shared
/// collaborators such as the cluster client are read-only after setup.
#[async_trait]
pub trait RemoteExec: Send + Sync {
    /// Execute `command` against `target`, capturing stdout and stderr.
    async fn exec(&self, target: &Target, command: &[String]) -> ExecOutcome;
}
