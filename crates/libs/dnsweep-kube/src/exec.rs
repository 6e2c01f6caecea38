//! Pod exec transport.

use async_trait::async_trait;
use dnsweep_audit::{ExecFailure, ExecOutcome, RemoteExec, Target};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    Client,
    api::{Api, AttachParams},
};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Production executor backed by the pod `exec` subresource.
///
/// Opens a bidirectional exec stream against one pod, captures stdout and
/// stderr to completion, then inspects the exec status frame. The shared
/// cluster client is cheap to clone and read-only here; no local state is
/// mutated. The caller bounds each call with the run deadline and drops the
/// in-flight future on expiry, which tears the attached stream down.
#[derive(Clone)]
pub struct KubeExec {
    client: Client,
}

impl KubeExec {
    /// Wrap the shared cluster client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteExec for KubeExec {
    async fn exec(&self, target: &Target, command: &[String]) -> ExecOutcome {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &target.namespace);
        let params = AttachParams::default()
            .container(&target.container)
            .stdin(false)
            .stdout(true)
            .stderr(true)
            .tty(false);

        let mut attached = match pods.exec(&target.name, command, &params).await {
            Ok(attached) => attached,
            Err(err) => {
                return ExecOutcome::failed(
                    target.clone(),
                    ExecFailure::Transport(err.to_string()),
                );
            }
        };

        // Drain both streams to EOF before asking for the status frame;
        // reading serially could deadlock on a full stderr pipe.
        let stdout_reader = attached.stdout();
        let stderr_reader = attached.stderr();
        let (stdout, stderr) = tokio::join!(drain(stdout_reader), drain(stderr_reader));

        let status = match attached.take_status() {
            Some(status) => status.await,
            None => None,
        };
        if let Err(err) = attached.join().await {
            return ExecOutcome::partial(
                target.clone(),
                stdout,
                stderr,
                ExecFailure::Command(err.to_string()),
            );
        }

        match status {
            Some(status) if status.status.as_deref() == Some("Failure") => {
                let reason = status
                    .message
                    .unwrap_or_else(|| "remote command reported failure".to_string());
                ExecOutcome::partial(target.clone(), stdout, stderr, ExecFailure::Command(reason))
            }
            _ => ExecOutcome::success(target.clone(), stdout, stderr),
        }
    }
}

/// Read a captured stream to EOF, tolerating a missing or broken stream.
///
/// A read error here means the stream died mid-transfer; whatever arrived is
/// kept and the failure surfaces through the exec status or join result.
async fn drain(reader: Option<impl AsyncRead + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        let _ = reader.read_to_end(&mut buf).await;
    }
    buf
}
