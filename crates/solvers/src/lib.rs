//! Explicit time stepping for linear advection on a periodic unit domain.
//!
//! The scheme takes one FTCS (forward-time, centered-space) step to produce the
//! second time level, then advances with the FTBS (forward-time,
//! backward-space) upwind update for the remaining steps. The result can be
//! compared with the exact traveling wave from [`analytic`].
//!
//! # Example
//!
//! ```
//! use advect_core::RunConfig;
//!
//! let run = advect_solvers::run(&RunConfig::default())?;
//!
//! assert_eq!(run.numerical.len(), 81);
//! assert_eq!(run.analytic.len(), 81);
//! # Ok::<(), advect_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel` — Runs the spatial pass of each step on the rayon thread pool.
//!   Results are bit-for-bit identical to the serial pass.

pub mod analytic;
pub mod ftbs;

mod run;

pub use run::{Run, run, run_with};
