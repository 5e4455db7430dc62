//! Command-line front end for FTBS advection runs.
//!
//! Parameters come from flags, an optional JSON or TOML config file, or the
//! built-in defaults, in that order of precedence. Results are written as CSV
//! for an external plotting tool; logs go to stderr.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Periodic linear advection with the FTBS scheme.
#[derive(Parser)]
#[command(name = "advect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Periodic linear advection with the FTBS scheme", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and write the final field as CSV
    Run(commands::run::RunArgs),
    /// Check a configuration file without running it
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
