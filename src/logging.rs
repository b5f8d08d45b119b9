//! Log stream setup
//!
//! All `tracing` output goes to a plain-text file opened in append mode.
//! Human-facing progress is written separately by the event sinks.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// `-v` flags win over `RUST_LOG`, which wins over the `info` default
fn build_filter(verbose: u8, rust_log: Option<String>) -> EnvFilter {
    match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(directives) if verbose == 0 => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(level_for(0)))
        }
        _ => EnvFilter::new(level_for(verbose)),
    }
}

pub fn init(log_file: &Path, verbose: u8) -> Result<()> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(build_filter(verbose, std::env::var("RUST_LOG").ok()))
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
