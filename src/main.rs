//! SemantIQ Dashboard CLI
//!
//! Binary entry point: resolves configuration (file, environment, flags),
//! initializes file-based logging, and launches the TUI runner.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use semantiq_dash_core::DashConfig;
use semantiq_dash_tui::DashRunner;

#[derive(Debug, Parser)]
#[command(
    name = "semantiq-dash",
    version,
    about = "Terminal dashboard for browsing and comparing SemantIQ benchmark runs"
)]
struct Args {
    /// Base URL of the benchmark API, including the /api prefix
    #[arg(long)]
    api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path; logs never go to stdout, the TUI owns it
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = DashConfig::load(args.config.as_deref())?;
    config.apply_env();
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }
    if let Some(path) = args.log_file {
        config.log_file = path;
    }

    let _log_guard = init_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(DashRunner::new(&config).run())
}

/// Initialize tracing to the configured log file. The returned guard must
/// stay alive for the process lifetime so buffered lines are flushed.
fn init_logging(config: &DashConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let dir = config
        .log_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = config
        .log_file
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "semantiq-dash.log".into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_overrides() {
        let args = Args::try_parse_from([
            "semantiq-dash",
            "--api-url",
            "http://10.0.0.5:8000/api",
            "--log-file",
            "/tmp/dash.log",
        ])
        .unwrap();
        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:8000/api"));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/dash.log")));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_default_to_none() {
        let args = Args::try_parse_from(["semantiq-dash"]).unwrap();
        assert!(args.api_url.is_none());
        assert!(args.config.is_none());
        assert!(args.log_file.is_none());
    }
}
