//! FTBS solver for periodic linear advection.
//!
//! The field is seeded from a [`Profile`], bootstrapped with one FTCS step,
//! then advanced with the first-order upwind (FTBS) update:
//!
//! ```text
//! step 1:    φ¹[j]   = φ⁰[j] − ½·c·(φ⁰[j+1] − φ⁰[j−1])
//! step n+1:  φⁿ⁺¹[j] = φⁿ[j] − c·(φⁿ[j] − φⁿ[j−1])
//! ```
//!
//! Indices wrap periodically and the duplicated end point mirrors index 0.
//!
//! # Example
//!
//! ```
//! use advect_core::{Bell, RunConfig};
//! use advect_solvers::ftbs::{self, Event, Status};
//!
//! let config = RunConfig::new(40, 0.5, 20);
//! let solution = ftbs::solve(&config, &Bell, |event: &Event<'_>| {
//!     assert!(event.field.is_periodic());
//!     None
//! })?;
//!
//! assert_eq!(solution.status, Status::Complete);
//! assert_eq!(solution.steps, 20);
//! # Ok::<(), advect_core::Error>(())
//! ```

mod action;
mod event;
mod solution;

pub mod stencil;

pub use action::Action;
pub use event::{Event, Stage};
pub use solution::{Solution, Status};

use advect_core::{Error, FieldState, Grid, Observer, Profile, RunConfig};
use tracing::{debug, info, trace, warn};

/// Runs the FTBS scheme for `config.steps` steps.
///
/// # Algorithm
///
/// 1. Validate the configuration, build the grid, and seed the field.
/// 2. Step 1: FTCS bootstrap from `previous` into `next`, then rotate.
/// 3. Steps 2 to `steps`: FTBS update from `current` into `next`, then rotate.
/// 4. After seeding and after every rotation, emit an [`Event`]. If the
///    observer returns [`Action::StopEarly`], return the field as it stands.
///
/// Every Courant number is accepted. Values outside `(0, 1]`, including
/// non-finite ones, are logged as a warning.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the configuration is degenerate and
/// [`Error::LengthMismatch`] if the profile does not fill the grid. Nothing
/// is computed in either case.
pub fn solve<P, Obs>(config: &RunConfig, profile: &P, mut observer: Obs) -> Result<Solution, Error>
where
    P: Profile + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    if !config.courant.is_finite() {
        warn!(
            courant = config.courant,
            "Courant number is not finite; the field will not be finite either"
        );
    } else if !config.is_stable() {
        warn!(
            courant = config.courant,
            "Courant number outside (0, 1]; the scheme will not transport stably"
        );
    }

    // Build the grid and seed both starting levels.
    let grid = Grid::new(config.intervals)?;
    let mut field = FieldState::seed(&grid, profile)?;
    let courant = config.courant;
    let dt = config.time_step();

    info!(
        intervals = config.intervals,
        courant,
        steps = config.steps,
        dt,
        "starting FTBS run"
    );

    // Emit initial event.
    let event = Event {
        step: 0,
        stage: Stage::Seeded,
        time: 0.0,
        field: &field,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, "stopped by observer");
        return Ok(finish(Status::StoppedByObserver, 0, grid, field, dt));
    }

    for step in 1..=config.steps {
        // Write the next level from the bootstrap or the upwind stencil.
        let levels = field.levels_mut();
        let stage = if step == 1 {
            stencil::bootstrap(levels.previous, levels.next, courant);
            Stage::Bootstrapped
        } else {
            stencil::advance(levels.current, levels.next, courant);
            Stage::Advanced
        };

        // Promote the new level to current.
        field.rotate();

        if stage == Stage::Bootstrapped {
            debug!("bootstrap step complete");
        }
        trace!(step, "field advanced");

        // Emit event to observer.
        let event = Event {
            step,
            stage,
            time: elapsed(step, dt),
            field: &field,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "stopped by observer");
            return Ok(finish(Status::StoppedByObserver, step, grid, field, dt));
        }
    }

    let solution = finish(Status::Complete, config.steps, grid, field, dt);
    info!(t = solution.t, "FTBS run complete");
    Ok(solution)
}

/// Runs the FTBS scheme without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<P>(config: &RunConfig, profile: &P) -> Result<Solution, Error>
where
    P: Profile + ?Sized,
{
    solve(config, profile, ())
}

fn elapsed(steps: usize, dt: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let steps = steps as f64;
    steps * dt
}

fn finish(status: Status, steps: usize, grid: Grid, field: FieldState, dt: f64) -> Solution {
    Solution {
        status,
        steps,
        grid,
        field,
        dt,
        t: elapsed(steps, dt),
    }
}
