//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can serve any solver that exposes the needed data.
//!
//! # Example
//!
//! ```rust
//! use advect_core::Observer;
//! use advect_observers::traits::{CanStopEarly, HasField};
//!
//! struct StopAfter {
//!     time: f64,
//! }
//!
//! impl<E: HasField, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use advect_solvers::ftbs;

/// An event that carries a field level.
pub trait HasField {
    /// Time level index of the field.
    fn step(&self) -> usize;

    /// Simulated time of the field.
    fn time(&self) -> f64;

    /// Field values, with the duplicated periodic end point last.
    fn field(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasField for ftbs::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn field(&self) -> &[f64] {
        self.current()
    }
}

impl CanStopEarly for ftbs::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
