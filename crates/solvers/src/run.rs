use advect_core::{Bell, Error, Grid, Profile, RunConfig};

use crate::ftbs::{self, Solution};

/// Everything a presentation layer needs from a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub grid: Grid,

    /// FTBS field after the last step.
    pub numerical: Vec<f64>,

    /// Exact solution at the same time, evaluated at `x − u·t`.
    pub analytic: Vec<f64>,

    /// Time step `dt = c·dx/u`.
    pub dt: f64,

    /// Elapsed time `t = steps·dt`.
    pub t: f64,
}

impl Run {
    /// Pairs a solution's final field with the exact solution for `profile`.
    #[must_use]
    pub fn from_solution<P: Profile + ?Sized>(solution: Solution, profile: &P) -> Self {
        let analytic = solution.analytic(profile);
        Self {
            numerical: solution.field.into_current(),
            analytic,
            grid: solution.grid,
            dt: solution.dt,
            t: solution.t,
        }
    }
}

/// Advects the [`Bell`] profile with the FTBS scheme.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the configuration is degenerate.
pub fn run(config: &RunConfig) -> Result<Run, Error> {
    run_with(config, &Bell)
}

/// Advects an arbitrary profile with the FTBS scheme.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the configuration is degenerate and
/// [`Error::LengthMismatch`] if the profile does not fill the grid.
pub fn run_with<P>(config: &RunConfig, profile: &P) -> Result<Run, Error>
where
    P: Profile + ?Sized,
{
    let solution = ftbs::solve_unobserved(config, profile)?;
    Ok(Run::from_solution(solution, profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_run() {
        let config = RunConfig::new(80, 0.2, 80);

        let output = run(&config).expect("should run");

        assert_eq!(output.grid.len(), 81);
        assert_eq!(output.numerical.len(), 81);
        assert_eq!(output.analytic.len(), 81);
        assert_relative_eq!(output.dt, 0.2 * (1.0 / 80.0) / 1.0);
        assert_relative_eq!(output.t, 80.0 * output.dt);
        for (x, exact) in output.grid.iter().zip(&output.analytic) {
            assert_eq!(*exact, Bell.value(x - output.t));
        }
    }

    #[test]
    fn custom_profile() {
        let flat = |_x: f64| 0.75;

        let run = run_with(&RunConfig::new(10, 0.9, 25), &flat).expect("should run");

        for value in &run.numerical {
            assert_relative_eq!(*value, 0.75, epsilon = 1e-12);
        }
        assert!(run.analytic.iter().all(|&v| v == 0.75));
    }

    #[test]
    fn aborted_run_returns_no_fields() {
        let result = run(&RunConfig::new(0, 0.2, 10));
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                name: "intervals",
                ..
            })
        ));

        let result = run(&RunConfig::new(80, 0.2, 0));
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "steps", .. })
        ));
    }

    #[test]
    fn nan_courant_returns_full_length_fields() {
        let output = run(&RunConfig::new(80, f64::NAN, 10)).expect("should run");

        assert_eq!(output.grid.len(), 81);
        assert_eq!(output.numerical.len(), 81);
        assert_eq!(output.analytic.len(), 81);
        assert!(output.dt.is_nan());
        assert!(output.numerical.iter().all(|v| v.is_nan()));
    }
}
