//! # Property-Chain Runtime
//!
//! Reads JSON invocations from stdin, one per line, and writes one JSON
//! response per line to stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pc_property_registry::{RegistryConfig, ReinitPolicy};
use pc_runtime::{load_identities, Host};
use pc_telemetry::{encode_metrics, init_telemetry, TelemetryConfig};

/// Property-Chain development host
#[derive(Parser, Debug)]
#[command(name = "pc-runtime")]
#[command(about = "Run property registry invocations read as JSON lines from stdin")]
struct Args {
    /// JSON file of identity records to preload, keyed by channel then owner id
    #[arg(short, long)]
    identities: Option<PathBuf>,

    /// Override PC_REINIT_POLICY (overwrite or reject)
    #[arg(long)]
    reinit_policy: Option<ReinitPolicy>,

    /// Print Prometheus metrics to stderr on exit
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry_config = TelemetryConfig::from_env().context("telemetry configuration")?;
    let _telemetry = init_telemetry(&telemetry_config).context("telemetry initialization")?;

    let mut config = RegistryConfig::from_env().context("registry configuration")?;
    if let Some(policy) = args.reinit_policy {
        config.reinit_policy = policy;
    }

    let identities = load_identities(&config, args.identities.as_deref())?;
    let host = Host::new(&config, Arc::new(identities));

    info!(
        reinit_policy = %config.reinit_policy,
        identity_chaincode = %config.identity_chaincode,
        "Property registry host ready"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut invocations = 0u64;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = host.process_line(&line);
        serde_json::to_writer(&mut stdout, &response).context("writing response")?;
        writeln!(stdout).context("writing response")?;
        stdout.flush().context("writing response")?;
        invocations += 1;
    }

    info!(invocations, "Input exhausted, shutting down");

    if args.metrics {
        eprint!("{}", encode_metrics()?);
    }

    Ok(())
}
