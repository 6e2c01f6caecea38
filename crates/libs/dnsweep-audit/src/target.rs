//! Audit target identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One addressable pod eligible for the diagnostic command.
///
/// Immutable once enumerated; the fan-out borrows targets read-only for the
/// duration of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Namespace owning the pod.
    pub namespace: String,
    /// Pod name.
    pub name: String,
    /// Container the diagnostic command runs in.
    pub container: String,
}

impl Target {
    /// Create a new target.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            container: container.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
