use async_trait::async_trait;
use dnsweep_audit::{AuditRunner, ExecFailure, ExecOutcome, RemoteExec, Target};
use dnsweep_config::AuditConfig;
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::{Duration, Instant},
};

const STALE_PRIMARY: &str = "nameserver 20.46.0.1\nsearch cluster.local\n";
const STALE_SECONDARY: &str = "nameserver 20.46.1.1\n";
const CLEAN: &str = "nameserver 10.96.0.10\nsearch cluster.local\n";

/// Scripted behavior for one target, keyed by pod name.
#[derive(Clone)]
enum Script {
    Output(&'static str),
    Fail(ExecFailure),
    Hang,
}

struct ScriptedExec {
    scripts: HashMap<String, Script>,
    calls: AtomicUsize,
}

impl ScriptedExec {
    fn new(scripts: impl IntoIterator<Item = (impl Into<String>, Script)>) -> Self {
        Self {
            scripts: scripts
                .into_iter()
                .map(|(name, script)| (name.into(), script))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteExec for ScriptedExec {
    async fn exec(&self, target: &Target, _command: &[String]) -> ExecOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self
            .scripts
            .get(&target.name)
            .cloned()
            .unwrap_or(Script::Output(CLEAN))
        {
            Script::Output(text) => {
                ExecOutcome::success(target.clone(), text.as_bytes().to_vec(), Vec::new())
            }
            Script::Fail(failure) => ExecOutcome::failed(target.clone(), failure),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                ExecOutcome::success(target.clone(), Vec::new(), Vec::new())
            }
        }
    }
}

fn config(deadline: Duration) -> AuditConfig {
    AuditConfig {
        deadline,
        ..AuditConfig::default()
    }
}

fn sorted(names: &[String]) -> Vec<String> {
    let mut names = names.to_vec();
    names.sort();
    names
}

#[tokio::test]
async fn no_targets_short_circuits_without_spawning() {
    let exec = Arc::new(ScriptedExec::new(std::iter::empty::<(String, Script)>()));
    let runner = AuditRunner::new(exec.clone(), AuditConfig::default());

    let started = Instant::now();
    let report = runner.run(Vec::new()).await;

    assert!(report.is_empty());
    assert_eq!(report.failures(), 0);
    assert_eq!(exec.calls(), 0);
    // Finalizes immediately, nowhere near the 10s default deadline.
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn every_target_reports_exactly_once() {
    let n = 16;
    let exec = Arc::new(ScriptedExec::new(
        (0..n).map(|i| (format!("pod-{i}"), Script::Output(STALE_PRIMARY))),
    ));
    let runner = AuditRunner::new(exec.clone(), config(Duration::from_secs(10)));

    let targets = (0..n)
        .map(|i| Target::new("kube-system", format!("pod-{i}"), "main"))
        .collect();
    let report = runner.run(targets).await;

    assert_eq!(exec.calls(), n);
    assert_eq!(report.flagged_pods(), n);
    assert_eq!(report.failures(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn induced_failures_do_not_affect_sibling_targets() {
    let exec = Arc::new(ScriptedExec::new([
        (
            "broken-1",
            Script::Fail(ExecFailure::Transport("connection refused".to_string())),
        ),
        (
            "broken-2",
            Script::Fail(ExecFailure::Command("exit status 1".to_string())),
        ),
        ("ok-1", Script::Output(STALE_PRIMARY)),
        ("ok-2", Script::Output(STALE_SECONDARY)),
        ("ok-3", Script::Output(STALE_PRIMARY)),
    ]));
    let runner = AuditRunner::new(exec.clone(), config(Duration::from_secs(10)));

    let targets = ["broken-1", "broken-2", "ok-1", "ok-2", "ok-3"]
        .into_iter()
        .map(|name| Target::new("infra", name, "main"))
        .collect();
    let report = runner.run(targets).await;

    assert_eq!(exec.calls(), 5);
    assert_eq!(report.failures(), 2);
    assert_eq!(
        sorted(report.matches().get("infra").expect("infra bucket")),
        vec!["ok-1", "ok-2", "ok-3"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_deadline_fails_slow_targets_within_bounded_grace() {
    let exec = Arc::new(ScriptedExec::new([
        ("stuck-1", Script::Hang),
        ("stuck-2", Script::Hang),
        ("fast", Script::Output(STALE_PRIMARY)),
    ]));
    let runner = AuditRunner::new(exec.clone(), config(Duration::from_millis(250)));

    let targets = ["stuck-1", "stuck-2", "fast"]
        .into_iter()
        .map(|name| Target::new("default", name, "main"))
        .collect();

    let started = Instant::now();
    let report = tokio::time::timeout(Duration::from_secs(8), runner.run(targets))
        .await
        .expect("run must not outlive deadline + grace");

    // Deadline plus grace, not per-target-multiplied time: the two stuck
    // targets time out in parallel, they do not serialize.
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(report.failures(), 2);
    assert_eq!(
        report.matches().get("default"),
        Some(&vec!["fast".to_string()])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn mixed_namespace_outputs_bucket_only_matches() {
    let exec = Arc::new(ScriptedExec::new([
        ("target-1", Script::Output(STALE_PRIMARY)),
        ("target-2", Script::Output(CLEAN)),
        ("target-3", Script::Output(STALE_SECONDARY)),
    ]));
    let runner = AuditRunner::new(exec, config(Duration::from_secs(10)));

    let targets = ["target-1", "target-2", "target-3"]
        .into_iter()
        .map(|name| Target::new("ns-a", name, "main"))
        .collect();
    let report = runner.run(targets).await;

    assert_eq!(report.matches().len(), 1);
    assert_eq!(
        sorted(report.matches().get("ns-a").expect("ns-a bucket")),
        vec!["target-1", "target-3"]
    );
    assert_eq!(report.failures(), 0);
}
