pub mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fieldwise_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "fieldwise",
    about = "Fieldwise farm advisory CLI",
    long_about = "Generate rule-based advisory reports from the bundled reference dataset: per-profile recommendations, aggregate crop metrics, config inspection, and readiness checks.",
    after_help = "Examples:\n  fieldwise recommend --name \"John Smith\" --location California --land-size 5 --crops Corn,Wheat --financial-goal \"Increase profit by 15%\"\n  fieldwise metrics --json\n  fieldwise doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Validate a farmer profile and produce an integrated advisory report")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(about = "List the bundled demo farmer profiles")]
    Profiles {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show per-crop aggregate metrics derived from the reference dataset")]
    Metrics {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate configuration and reference dataset integrity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

fn init_logging(config: &AppConfig) {
    use fieldwise_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Commands that depend on config strictness (config, doctor) load it
    // themselves and report failures in their own output.
    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => init_logging(&config),
        Err(error) => eprintln!("warning: logging uses defaults, config not loaded: {error}"),
    }

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(args),
        Command::Profiles { json } => commands::profiles::run(json),
        Command::Metrics { json } => commands::metrics::run(json),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
