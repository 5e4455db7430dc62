//! Checks a configuration file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use crate::config;

/// Arguments for `advect validate`.
#[derive(Args)]
pub struct ValidateArgs {
    /// Config file (`.json` or `.toml`)
    #[arg(short = 'f', long)]
    pub config: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    config
        .validate()
        .with_context(|| format!("{} is not a valid run", args.config.display()))?;

    if !config.is_stable() {
        warn!(
            courant = config.courant,
            "Courant number outside (0, 1]; results will not be stable"
        );
    }
    info!(
        intervals = config.intervals,
        courant = config.courant,
        steps = config.steps,
        dx = config.spacing(),
        dt = config.time_step(),
        t = config.elapsed(),
        "configuration is valid"
    );
    Ok(())
}
