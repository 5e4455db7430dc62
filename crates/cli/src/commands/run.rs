//! Runs a simulation.

use std::{fs::File, io, path::PathBuf, time::Instant};

use advect_core::{Bell, Observer};
use advect_observers::{PeriodicityCheck, StopOnNonFinite, Trace};
use advect_solvers::{
    Run,
    ftbs::{self, Action, Event, Status},
};
use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{info, warn};

use crate::{config::ParamArgs, output};

/// Arguments for `advect run`.
#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// CSV output path; defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop as soon as the field overflows
    #[arg(long)]
    pub stop_on_overflow: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let config = args.params.resolve()?;
    info!(?config, "resolved configuration");

    let started = Instant::now();
    let mut periodicity = PeriodicityCheck::new();
    let mut guard = StopOnNonFinite::new();
    let mut trace = Trace;

    let solution = ftbs::solve(&config, &Bell, |event: &Event<'_>| {
        let _: Option<Action> = trace.observe(event);
        let _: Option<Action> = periodicity.observe(event);
        let action: Option<Action> = if args.stop_on_overflow {
            guard.observe(event)
        } else {
            None
        };
        action
    })
    .context("simulation rejected its parameters")?;

    if let Some(step) = periodicity.first_violation() {
        bail!("periodic end points diverged at step {step}");
    }
    if solution.status == Status::StoppedByObserver {
        warn!(steps = solution.steps, "run stopped before the requested step count");
    }
    info!(
        steps = solution.steps,
        dt = solution.dt,
        t = solution.t,
        elapsed_ms = started.elapsed().as_millis(),
        "simulation finished"
    );

    let run = Run::from_solution(solution, &Bell);

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            output::write_csv(&run, file)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote results");
        }
        None => output::write_csv(&run, io::stdout().lock()).context("writing to stdout")?,
    }

    Ok(())
}
