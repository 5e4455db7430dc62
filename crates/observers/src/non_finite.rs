use advect_core::Observer;
use tracing::warn;

use crate::traits::{CanStopEarly, HasField};

/// Stops the run at the first level holding a NaN or infinite value.
///
/// Unstable Courant numbers grow the field geometrically; this observer ends
/// such runs before the values become meaningless.
#[derive(Debug, Clone, Default)]
pub struct StopOnNonFinite {
    tripped_at: Option<usize>,
}

impl StopOnNonFinite {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Step at which the run was stopped, if it was.
    #[must_use]
    pub fn tripped_at(&self) -> Option<usize> {
        self.tripped_at
    }

    fn check<E: HasField, A: CanStopEarly>(&mut self, event: &E) -> Option<A> {
        if event.field().iter().all(|v| v.is_finite()) {
            return None;
        }
        warn!(step = event.step(), "field is no longer finite; stopping");
        self.tripped_at = Some(event.step());
        Some(A::stop_early())
    }
}

impl<E: HasField, A: CanStopEarly> Observer<E, A> for StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}

/// Allows `&mut StopOnNonFinite` to be passed to solvers that take an observer
/// by value.
impl<E: HasField, A: CanStopEarly> Observer<E, A> for &mut StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use advect_core::{Bell, RunConfig};
    use advect_solvers::ftbs::{self, Status};

    #[test]
    fn stable_runs_complete() {
        let mut guard = StopOnNonFinite::new();

        let solution = ftbs::solve(&RunConfig::new(40, 0.5, 40), &Bell, &mut guard).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(guard.tripped_at(), None);
    }

    #[test]
    fn diverging_runs_stop() {
        let mut guard = StopOnNonFinite::new();

        // The Nyquist mode grows by |1 - 2c| = 9 per step at c = 5.
        let solution = ftbs::solve(&RunConfig::new(64, 5.0, 2_000), &Bell, &mut guard).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        let step = guard.tripped_at().expect("should trip");
        assert_eq!(solution.steps, step);
        assert!(step < 2_000);
    }
}
