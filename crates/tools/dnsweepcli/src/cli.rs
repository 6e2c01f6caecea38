use crate::prelude::*;
use clap::Parser;
use dnsweep_config::{AuditConfig, AuditUserConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dnsweep")]
#[command(about = "Audit host-network pods for deprecated DNS resolver addresses")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overall run deadline in seconds
    #[arg(long)]
    pub deadline_secs: Option<u64>,

    /// Resolver address to flag; repeatable, replaces the configured set
    #[arg(long = "bad-resolver", value_name = "ADDR")]
    pub bad_resolvers: Vec<String>,

    /// Container to run the command in (default: first declared container)
    #[arg(long)]
    pub container: Option<String>,

    /// Diagnostic command to run inside each pod
    #[arg(long, num_args = 1.., value_name = "ARG")]
    pub command: Option<Vec<String>>,
}

impl Cli {
    /// Build the run configuration: config file (or defaults) with flag
    /// overrides applied on top.
    pub fn into_config(self) -> Result<AuditConfig> {
        let mut user = match &self.config {
            Some(path) => AuditUserConfig::from_file(path)?,
            None => AuditUserConfig::default(),
        };

        if let Some(secs) = self.deadline_secs {
            user.deadline_secs = secs;
        }
        if let Some(command) = self.command {
            user.command = command;
        }
        if !self.bad_resolvers.is_empty() {
            user.bad_resolvers = self.bad_resolvers;
        }
        if let Some(container) = self.container {
            user.container = Some(container);
        }

        Ok(AuditConfig::from_user_config(user)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsweep_config::ContainerPolicy;
    use std::time::Duration;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["dnsweep"]);
        let config = cli.into_config().expect("config");
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "dnsweep",
            "--deadline-secs",
            "3",
            "--bad-resolver",
            "10.0.0.53",
            "--bad-resolver",
            "10.0.1.53",
            "--container",
            "proxy",
            "--command",
            "cat",
            "/etc/resolv.conf",
        ]);
        let config = cli.into_config().expect("config");
        assert_eq!(config.deadline, Duration::from_secs(3));
        assert_eq!(config.bad_resolvers, vec!["10.0.0.53", "10.0.1.53"]);
        assert_eq!(config.container, ContainerPolicy::Named("proxy".to_string()));
        assert_eq!(config.command, vec!["cat", "/etc/resolv.conf"]);
    }
}
