//! Core configuration types for a resolver audit run.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tracing::info;

fn default_deadline_secs() -> u64 {
    10
}

fn default_command() -> Vec<String> {
    vec!["cat".to_string(), "/etc/resolv.conf".to_string()]
}

fn default_bad_resolvers() -> Vec<String> {
    vec!["20.46.0.1".to_string(), "20.46.1.1".to_string()]
}

/// Which container of a multi-container pod receives the diagnostic command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerPolicy {
    /// Use the first container in the pod's declared container list.
    ///
    /// This is the documented default policy. Multi-container pods may get
    /// audited through the wrong container; that is an accepted limitation,
    /// use [`ContainerPolicy::Named`] to pin a specific one.
    #[default]
    FirstDeclared,
    /// Use the container with this exact name.
    Named(String),
}

/// User-provided configuration from a TOML file.
///
/// Every field carries a default matching the original hardwired audit, so an
/// empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditUserConfig {
    /// Wall-clock budget for the whole run, in seconds.
    pub deadline_secs: u64,
    /// Diagnostic command executed inside every target pod.
    pub command: Vec<String>,
    /// Resolver addresses whose presence in captured output flags a pod.
    pub bad_resolvers: Vec<String>,
    /// Optional container name override; unset means first declared container.
    pub container: Option<String>,
}

impl Default for AuditUserConfig {
    fn default() -> Self {
        Self {
            deadline_secs: default_deadline_secs(),
            command: default_command(),
            bad_resolvers: default_bad_resolvers(),
            container: None,
        }
    }
}

impl AuditUserConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        info!(path = %file_path.display(), "loading audit configuration");
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }
}

/// Internal configuration consumed by the audit engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Shared deadline for the whole run.
    pub deadline: Duration,
    /// Diagnostic command executed inside every target pod.
    pub command: Vec<String>,
    /// Resolver addresses whose presence in captured output flags a pod.
    pub bad_resolvers: Vec<String>,
    /// Container selection policy.
    pub container: ContainerPolicy,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            deadline: Duration::from_secs(default_deadline_secs()),
            command: default_command(),
            bad_resolvers: default_bad_resolvers(),
            container: ContainerPolicy::default(),
        }
    }
}

impl AuditConfig {
    /// Convert user configuration to internal configuration.
    ///
    /// Rejects an empty diagnostic command; everything else is accepted as
    /// given (an empty bad-resolver set is legal and simply never matches).
    pub fn from_user_config(config: AuditUserConfig) -> Result<Self> {
        if config.command.is_empty() {
            return Err(Error::EmptyCommand);
        }
        let container = match config.container {
            Some(name) => ContainerPolicy::Named(name),
            None => ContainerPolicy::FirstDeclared,
        };
        Ok(Self {
            deadline: Duration::from_secs(config.deadline_secs),
            command: config.command,
            bad_resolvers: config.bad_resolvers,
            container,
        })
    }
}
