//! Fan-out coordinator.

use crate::{
    exec::RemoteExec,
    outcome::{ExecFailure, ExecOutcome},
    report::AuditReport,
    target::Target,
};
use dnsweep_config::AuditConfig;
use std::sync::Arc;
use tokio::{
    sync::mpsc,
    time::{Instant, timeout_at},
};
use tracing::info;

/// Coordinates one audit run: parallel dispatch, fan-in, aggregation.
///
/// Every target gets its own execution task (no pooling, no concurrency cap —
/// the target set is bounded by cluster size at invocation time). A single
/// deadline shared by all tasks bounds the run's wall-clock time; an expired
/// task reports a timeout outcome instead of hanging. One task's failure
/// never cancels its siblings.
pub struct AuditRunner {
    executor: Arc<dyn RemoteExec>,
    config: AuditConfig,
}

impl AuditRunner {
    /// Create a runner from an executor and a run configuration.
    pub fn new(executor: Arc<dyn RemoteExec>, config: AuditConfig) -> Self {
        Self { executor, config }
    }

    /// Run the diagnostic command against every target and aggregate the
    /// outcomes into a finalized [`AuditReport`].
    ///
    /// The consumer loop observes exactly one outcome per target before the
    /// channel closes: each task owns a sender clone and deposits exactly one
    /// outcome (its execution result, or a timeout outcome when the deadline
    /// expires first), and the root sender is dropped before the drain, so
    /// `recv` yields `None` only after every task has reported.
    pub async fn run(&self, targets: Vec<Target>) -> AuditReport {
        let mut report = AuditReport::default();
        if targets.is_empty() {
            info!("no targets to audit");
            return report;
        }

        info!(
            targets = targets.len(),
            deadline_secs = self.config.deadline.as_secs(),
            "running diagnostic command against all targets"
        );

        let deadline = Instant::now() + self.config.deadline;
        let (tx, mut rx) = mpsc::channel::<ExecOutcome>(1);

        for target in targets {
            let tx = tx.clone();
            let executor = Arc::clone(&self.executor);
            let command = self.config.command.clone();
            tokio::spawn(async move {
                let outcome = match timeout_at(deadline, executor.exec(&target, &command)).await {
                    Ok(outcome) => outcome,
                    Err(_) => ExecOutcome::failed(target, ExecFailure::Timeout),
                };
                // The receiver outlives every sender; this only fails if the
                // consumer loop itself went away.
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        while let Some(outcome) = rx.recv().await {
            report.record(outcome, &self.config.bad_resolvers);
        }

        info!(
            flagged = report.flagged_pods(),
            failures = report.failures(),
            "audit run complete"
        );
        report
    }
}
