use crate::Error;

/// Advection speed `u`, fixed for every run.
pub const ADVECTION_SPEED: f64 = 1.0;

/// Parameters of a single advection run.
///
/// The defaults reproduce the reference case: 80 intervals, a Courant number
/// of 0.2, and 80 time steps.
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RunConfig {
    /// Number of spatial intervals `N`.
    pub intervals: usize,
    /// Courant number `c = u * dt / dx`.
    pub courant: f64,
    /// Number of time steps, including the bootstrap step.
    pub steps: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            intervals: 80,
            courant: 0.2,
            steps: 80,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn new(intervals: usize, courant: f64, steps: usize) -> Self {
        Self {
            intervals,
            courant,
            steps,
        }
    }

    #[must_use]
    pub fn with_intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    #[must_use]
    pub fn with_courant(mut self, courant: f64) -> Self {
        self.courant = courant;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Checks that the run is well posed.
    ///
    /// Every Courant number is accepted. Values above one are unstable, zero
    /// means no transport, and a non-finite value fills the field with NaN or
    /// infinity, but all of them run deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if there are no intervals or no
    /// steps.
    pub fn validate(&self) -> Result<(), Error> {
        if self.intervals < 1 {
            return Err(Error::invalid("intervals", "must be at least 1"));
        }
        if self.steps < 1 {
            return Err(Error::invalid("steps", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns `true` if the Courant number lies in `(0, 1]`.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.courant > 0.0 && self.courant <= 1.0
    }

    /// Grid spacing `dx = 1 / N`.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let intervals = self.intervals as f64;
        1.0 / intervals
    }

    /// Time step `dt = c * dx / u`.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.courant * self.spacing() / ADVECTION_SPEED
    }

    /// Elapsed time after all steps, `t = steps * dt`.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let steps = self.steps as f64;
        steps * self.time_step()
    }
}
