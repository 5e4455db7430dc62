use std::{
    fs,
    path::{Path, PathBuf},
};

use advect_core::RunConfig;
use anyhow::{Context, Result, bail};
use clap::Args;

/// Run parameters shared by every subcommand.
#[derive(Debug, Default, Args)]
pub struct ParamArgs {
    /// Config file (`.json` or `.toml`); flags override its values
    #[arg(short = 'f', long)]
    pub config: Option<PathBuf>,

    /// Number of spatial intervals N
    #[arg(short = 'n', long)]
    pub intervals: Option<usize>,

    /// Courant number c
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub courant: Option<f64>,

    /// Number of time steps, bootstrap included
    #[arg(short, long)]
    pub steps: Option<usize>,
}

impl ParamArgs {
    /// Merges defaults, the config file, and flags into a run configuration.
    pub fn resolve(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => load(path)?,
            None => RunConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut config: RunConfig) -> RunConfig {
        if let Some(intervals) = self.intervals {
            config.intervals = intervals;
        }
        if let Some(courant) = self.courant {
            config.courant = courant;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        config
    }
}

/// Reads a configuration file, choosing the format by extension.
pub fn load(path: &Path) -> Result<RunConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text, path.extension().and_then(|ext| ext.to_str()))
        .with_context(|| format!("parsing {}", path.display()))
}

fn parse(text: &str, extension: Option<&str>) -> Result<RunConfig> {
    match extension {
        Some("json") => Ok(serde_json::from_str(text)?),
        Some("toml") => Ok(toml::from_str(text)?),
        Some(other) => bail!("unsupported config format `.{other}`; use .json or .toml"),
        None => bail!("config file has no extension; use .json or .toml"),
    }
}
