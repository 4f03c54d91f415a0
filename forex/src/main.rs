use anyhow::Context;
use clap::Parser;
use forex::cli::{check_input_file, check_report_path, Cli, Command};
use forex::config::RuntimeConfig;
use forex::engine::matchengine::MatchEngine;
use forex::engine::report::ReportWriter;
use log::{info, warn};
use std::path::{Path, PathBuf};

fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .unwrap_or_default();
}

fn trade(config: &RuntimeConfig, file: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    check_input_file(file)?;

    let report = ReportWriter::new(output.unwrap_or_else(|| config.report_path_for(file)));
    check_report_path(file, report.path())?;

    let engine = MatchEngine::new(config.code_validator());
    let run = engine
        .run(file, &report)
        .with_context(|| format!("no report written for {}", file.display()))?;

    info!(
        "{} orders processed: {} trades, {} rejected",
        run.orders.len(),
        run.summary.trades(),
        run.summary.rejected
    );
    if run.report_written {
        info!("report available at {}", report.path().display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = RuntimeConfig::from_toml(&cli.config);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logger(&config.log_level);
    if let Err(e) = &loaded {
        warn!("{}, using defaults", e);
    }
    let config = config.normalized();

    match cli.command {
        Command::Trade { file, output } => trade(&config, &file, output),
    }
}
