//! Abrechnung command-line shell.
//!
//! Reads a statement input snapshot (JSON), builds the statement model and
//! prints it as pretty JSON on stdout. Logs go to stderr.

mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use abrechnung_core::{StatementBuilder, StatementInput};
use abrechnung_shared::{AppConfig, AppError, LoggingConfig};
use anyhow::Context as _;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use output::{UnitOutcome, exit_code};

/// Builds Heizkosten- and Betriebskostenabrechnungen from input snapshots.
#[derive(Debug, Parser)]
#[command(name = "abrechnung", version, about)]
struct Cli {
    /// Path to the input snapshot (JSON).
    input: PathBuf,

    /// Build a statement for every unit instead of the document's unit.
    #[arg(long)]
    all: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.logging);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Statement generation failed");
            eprintln!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn run(cli: &Cli, config: AppConfig) -> anyhow::Result<()> {
    let input = read_input(&cli.input)?;
    let builder = StatementBuilder::new(config.engine);

    let json = if cli.all {
        let outcomes: Vec<UnitOutcome> = builder
            .build_all(&input)
            .into_iter()
            .map(|(unit_id, result)| UnitOutcome::from_result(unit_id, result))
            .collect();
        info!(units = outcomes.len(), "Statements built");
        let json = serde_json::to_string_pretty(&outcomes)?;
        if let Some(err) = outcomes.into_iter().find_map(UnitOutcome::into_error) {
            println!("{json}");
            return Err(err.into());
        }
        json
    } else {
        let model = builder.build(&input).map_err(AppError::from)?;
        info!(warnings = model.warnings.len(), "Statement built");
        serde_json::to_string_pretty(&model)?
    };

    println!("{json}");
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<StatementInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;
    let input = serde_json::from_str(&raw)
        .map_err(|err| AppError::Validation(format!("{}: {err}", path.display())))?;
    Ok(input)
}
