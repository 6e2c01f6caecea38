//! Run configuration for the dnsweep resolver audit.
//!
//! Everything the audit hardwires by default (deadline, diagnostic command,
//! bad-resolver set, container selection) is externalized here so a run can be
//! reconfigured from a TOML file or command-line flags without touching code.
//!
//! # Usage
//!
//! ```rust
//! use dnsweep_config::{AuditConfig, AuditUserConfig};
//!
//! // An empty TOML document is valid; every field has a default.
//! let user = AuditUserConfig::from_toml("").unwrap();
//! let config = AuditConfig::from_user_config(user).unwrap();
//! assert_eq!(config.deadline.as_secs(), 10);
//! ```

pub mod audit_config;
pub mod error;
pub mod prelude;

pub use audit_config::{AuditConfig, AuditUserConfig, ContainerPolicy};
