//! Per-target execution outcomes.

use crate::target::Target;
use std::borrow::Cow;

/// Why running the diagnostic command against one target failed.
///
/// Per-target failures are isolated: they are logged and excluded from the
/// report, and never abort sibling executions or the overall run.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecFailure {
    /// The execution stream could not be established (network, auth, or
    /// cluster API failure). No output was captured.
    #[error("failed to establish exec stream: {0}")]
    Transport(String),

    /// The shared deadline expired before the command completed.
    #[error("deadline expired before the command completed")]
    Timeout,

    /// The stream was established but the remote command reported failure or
    /// the stream errored mid-transfer. Partial output may have been captured.
    #[error("remote command failed: {0}")]
    Command(String),
}

/// The terminal result of running the diagnostic command against one target.
///
/// Created by one executor invocation and consumed exactly once by the
/// aggregator. Captured output and a failure may coexist when the stream
/// errored after producing partial output; such outcomes are never classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    /// The target this outcome originated from.
    pub target: Target,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error.
    pub stderr: Vec<u8>,
    /// Failure cause, if the execution did not complete cleanly.
    pub failure: Option<ExecFailure>,
}

impl ExecOutcome {
    /// A clean execution with captured output.
    pub fn success(target: Target, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            target,
            stdout,
            stderr,
            failure: None,
        }
    }

    /// A failed execution with no captured output.
    pub fn failed(target: Target, failure: ExecFailure) -> Self {
        Self {
            target,
            stdout: Vec::new(),
            stderr: Vec::new(),
            failure: Some(failure),
        }
    }

    /// A failed execution that still captured partial output.
    pub fn partial(target: Target, stdout: Vec<u8>, stderr: Vec<u8>, failure: ExecFailure) -> Self {
        Self {
            target,
            stdout,
            stderr,
            failure: Some(failure),
        }
    }

    /// Captured standard output as text, with invalid UTF-8 replaced.
    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }
}
