//! `bikeshare`: interactive bikeshare trip statistics.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bikeshare_stats::config::ReportConfig;
use bikeshare_stats::ingestion::{LoadOptions, LoadSeverity, TracingObserver};
use bikeshare_stats::shell::Shell;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "bikeshare", about = "Explore US bikeshare trip data", version)]
struct Args {
    /// Directory holding the city CSV files
    #[arg(short, long, env = "BIKESHARE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file overriding the city, month and day menus
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "bikeshare_stats=info")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let mut config = match &args.config {
        Some(path) => ReportConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }
    config.validate()?;

    let options = LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        alert_at_or_above: LoadSeverity::Critical,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(&config, stdin.lock(), stdout.lock());
    shell.run(&options).context("bikeshare session failed")?;
    Ok(())
}

/// Stderr subscriber; `RUST_LOG` wins over `--log-level`.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
