use advect_core::{FieldState, Grid, Profile};

use crate::analytic;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an FTBS run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Number of steps completed, bootstrap included.
    pub steps: usize,

    pub grid: Grid,

    /// Field levels as of the last completed step.
    pub field: FieldState,

    /// Time step `dt`.
    pub dt: f64,

    /// Simulated time reached, `steps * dt`.
    pub t: f64,
}

impl Solution {
    /// Final numerical field.
    #[must_use]
    pub fn numerical(&self) -> &[f64] {
        self.field.current()
    }

    /// Exact solution on the same grid at the time reached.
    #[must_use]
    pub fn analytic<P: Profile + ?Sized>(&self, profile: &P) -> Vec<f64> {
        analytic::exact(&self.grid, profile, self.t)
    }
}
