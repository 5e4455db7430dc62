//! Core types for explicit linear advection on a periodic unit domain.
//!
//! This crate defines the pieces that steppers and observers build on:
//!
//! - [`Grid`] — uniformly spaced sample points on `[0, 1]`, both ends included
//! - [`Profile`] — a pure scalar function of position, such as the [`Bell`]
//! - [`FieldState`] — three rotating time levels of the discretized field
//! - [`RunConfig`] — the immutable parameters of a single run
//! - [`Observer`] — receives solver events and optionally returns control actions

mod config;
mod error;
mod field;
mod grid;
mod observer;
mod profile;

pub use config::{ADVECTION_SPEED, RunConfig};
pub use error::Error;
pub use field::{FieldState, Levels};
pub use grid::Grid;
pub use observer::Observer;
pub use profile::{Bell, Profile};
