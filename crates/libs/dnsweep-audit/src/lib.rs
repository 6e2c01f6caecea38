//! Concurrent fan-out audit engine for the dnsweep resolver audit.
//!
//! Given a bounded set of target pods, [`AuditRunner`] runs a diagnostic
//! command against every target in parallel through a [`RemoteExec`]
//! implementation, collects the heterogeneous outcomes under a shared
//! deadline, and aggregates the pods whose captured output references a
//! deprecated resolver address into an [`AuditReport`].
//!
//! # Usage
//!
//! ```rust
//! use dnsweep_audit::{AuditRunner, ExecOutcome, RemoteExec, Target};
//! use dnsweep_config::AuditConfig;
//! use std::sync::Arc;
//!
//! struct StaleResolver;
//!
//! #[async_trait::async_trait]
//! impl RemoteExec for StaleResolver {
//!     async fn exec(&self, target: &Target, _command: &[String]) -> ExecOutcome {
//!         ExecOutcome::success(target.clone(), b"nameserver 20.46.0.1\n".to_vec(), Vec::new())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let runner = AuditRunner::new(Arc::new(StaleResolver), AuditConfig::default());
//! let targets = vec![Target::new("kube-system", "kube-proxy-7x2vq", "kube-proxy")];
//! let report = runner.run(targets).await;
//! assert_eq!(report.flagged_pods(), 1);
//! # }
//! ```

pub mod exec;
pub mod outcome;
pub mod report;
pub mod runner;
pub mod target;

pub use exec::RemoteExec;
pub use outcome::{ExecFailure, ExecOutcome};
pub use report::AuditReport;
pub use runner::AuditRunner;
pub use target::Target;
