use std::process;

use clap::Parser;
use tracing::{debug, error, info};

use sastwrap_core::config::{LogLevel, ScanConfiguration};
use sastwrap_core::exec::ProcessRunner;

mod args;

/// Install the log subscriber once, at the level the user asked for.
///
/// The level is read from the parsed configuration and passed down from
/// here; nothing else mutates logging state for the rest of the run.
fn init_logging(level: LogLevel) {
    let max_level = match level {
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Fail => tracing::Level::ERROR,
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &ScanConfiguration) -> anyhow::Result<()> {
    debug!(
        "resolved configuration:\n{}",
        serde_json::to_string_pretty(&config.redacted())?
    );
    sastwrap_core::run_analysis(config, &ProcessRunner)?;
    Ok(())
}

fn main() {
    let config = args::Args::parse().into_config();
    init_logging(config.log_level);

    info!("starting SOOS SAST analysis");
    if let Err(err) = run(&config) {
        error!("Error: {err}");
        process::exit(1);
    }
}
