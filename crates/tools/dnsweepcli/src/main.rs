//! dnsweep — audit host-network pods for deprecated DNS resolver addresses.
//!
//! Enumerates every Running host-network pod, runs a diagnostic command in
//! each one concurrently under a shared deadline, and prints a table of the
//! pods whose resolver configuration still references a flagged address.
//!
//! Exits 0 when there are no targets, no matches, or a report was rendered;
//! exits non-zero only on fatal configuration or cluster access errors.

mod cli;
mod error;
mod prelude;
mod table;

use crate::prelude::*;
use clap::Parser;
use cli::Cli;
use dnsweep_audit::AuditRunner;
use dnsweep_kube::{KubeExec, cluster};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let result = run(cli).await;

    if let Err(ref e) = result {
        error!("{e}");
    }
    result
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let bad_resolvers = config.bad_resolvers.join(", ");

    let client = cluster::connect().await?;
    let targets = cluster::list_host_network_targets(client.clone(), &config.container).await?;
    if targets.is_empty() {
        info!("no host-network pods found");
        return Ok(());
    }

    let runner = AuditRunner::new(Arc::new(KubeExec::new(client)), config);
    let report = runner.run(targets).await;

    if report.is_empty() {
        info!("no pods using deprecated resolvers ({bad_resolvers})");
        return Ok(());
    }

    info!(
        flagged = report.flagged_pods(),
        failures = report.failures(),
        "pods still using deprecated resolvers ({bad_resolvers}):"
    );
    print!("{}", table::render(report.matches()));
    Ok(())
}
