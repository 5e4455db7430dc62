//! Reusable observers for advection runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events expose a field.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasField`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`PeriodicityCheck`] — records the first step where the duplicated end
//!   point stops matching index 0
//! - [`History`] — copies every `k`-th level for later presentation
//! - [`StopOnNonFinite`] — stops the run once the field overflows
//! - [`Trace`] — logs each step through `tracing`
//!
//! Each observer can be passed by value or as `&mut`, so its state can be read
//! after the solve returns.
//!
//! [`Observer`]: advect_core::Observer
//! [`HasField`]: traits::HasField
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod non_finite;
mod periodicity;
mod trace;

pub use history::{History, Record};
pub use non_finite::StopOnNonFinite;
pub use periodicity::PeriodicityCheck;
pub use trace::Trace;
