//! Streaming outcome classification and aggregation.

use crate::outcome::ExecOutcome;
use std::collections::BTreeMap;
use tracing::error;

/// Aggregated audit result: namespace → pods still using a bad resolver.
///
/// Built incrementally as outcomes arrive and finalized only once every
/// outcome is accounted for. A pod name appears in at most one namespace
/// bucket, in first-seen order within the bucket; failed executions are
/// logged and counted but never included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    matches: BTreeMap<String, Vec<String>>,
    failures: usize,
}

impl AuditReport {
    /// Classify one outcome and fold it into the report.
    ///
    /// Outcomes carrying a failure cause are logged at error severity and
    /// excluded; even partial output captured before the failure is discarded
    /// from classification. Clean outcomes are flagged when their stdout
    /// contains any address from `bad_resolvers`.
    pub fn record(&mut self, outcome: ExecOutcome, bad_resolvers: &[String]) {
        if let Some(cause) = &outcome.failure {
            error!(
                namespace = %outcome.target.namespace,
                pod = %outcome.target.name,
                %cause,
                "failed to run diagnostic command"
            );
            self.failures += 1;
            return;
        }

        let stdout = outcome.stdout_text();
        if bad_resolvers.iter().any(|addr| stdout.contains(addr.as_str())) {
            self.matches
                .entry(outcome.target.namespace)
                .or_default()
                .push(outcome.target.name);
        }
    }

    /// Namespace buckets of flagged pod names.
    pub fn matches(&self) -> &BTreeMap<String, Vec<String>> {
        &self.matches
    }

    /// Number of executions excluded because they failed.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Total number of flagged pods across all namespaces.
    pub fn flagged_pods(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }

    /// True when no pod matched the bad-resolver set.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
