use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spire_stats::config::AnalysisConfig;
use spire_stats::report::{ClearRateReport, DetailedReport, Report};
use spire_stats::runner::ReportRunner;

#[derive(Parser)]
#[command(name = "spire-stats")]
#[command(about = "Slay the Spire clear-rate analysis over local run history")]
#[command(version)]
struct Cli {
    /// Path to configuration file (optional)
    #[arg(long, default_value = "./spire-stats.toml")]
    config: PathBuf,

    /// Directory holding the character folders
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Ascension level to analyze
    #[arg(long)]
    ascension: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Full-clear rate per character
    ClearRate,

    /// Outcomes, averages, defeat causes and comparison table
    Detailed,

    /// Run both reports one after another (default)
    All,
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AnalysisConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(base_dir) = cli.base_dir {
        config.base_dir = base_dir;
    }
    if let Some(ascension) = cli.ascension {
        config.target_ascension = ascension;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.log_level, cli.json_logs);

    tracing::info!("Starting spire-stats v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::All) {
        Commands::ClearRate => ClearRateReport.generate(&config, &mut out)?,
        Commands::Detailed => DetailedReport.generate(&config, &mut out)?,
        Commands::All => {
            writeln!(out, "Slay the Spire clear rate analysis tool")?;
            writeln!(out, "{}", "=".repeat(60))?;
            ReportRunner::default().run_all(&config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
