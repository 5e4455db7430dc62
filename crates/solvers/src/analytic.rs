//! Exact solution of the linear advection equation.
//!
//! With constant speed `u`, the initial profile translates without changing
//! shape: `φ(x, t) = φ₀(x − u·t)`.

use advect_core::{ADVECTION_SPEED, Grid, Profile};

/// Distance the wave travels in `elapsed` time.
#[must_use]
pub fn distance(elapsed: f64) -> f64 {
    ADVECTION_SPEED * elapsed
}

/// Evaluates `profile` at every grid point shifted back by `u * elapsed`.
#[must_use]
pub fn exact<P: Profile + ?Sized>(grid: &Grid, profile: &P, elapsed: f64) -> Vec<f64> {
    profile.evaluate(&grid.shifted_back(distance(elapsed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use advect_core::Bell;
    use approx::assert_relative_eq;

    #[test]
    fn zero_time_is_the_initial_profile() {
        let grid = Grid::new(16).unwrap();

        let values = exact(&grid, &Bell, 0.0);

        assert_eq!(values, Bell.evaluate(grid.coordinates()));
    }

    #[test]
    fn evaluates_at_shifted_coordinates() {
        let grid = Grid::new(80).unwrap();
        let elapsed = 0.2;

        let values = exact(&grid, &Bell, elapsed);

        for (x, value) in grid.iter().zip(&values) {
            assert_eq!(*value, Bell.value(x - elapsed));
        }
    }

    #[test]
    fn peak_moves_with_the_wave() {
        let grid = Grid::new(100).unwrap();

        // The bump peaks at x = 0.25; after t = 0.25 it peaks at x = 0.5.
        let values = exact(&grid, &Bell, 0.25);

        assert_relative_eq!(values[50], 1.0, epsilon = 1e-12);
        assert_relative_eq!(values[25], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn one_full_period_returns_to_start() {
        let grid = Grid::new(40).unwrap();

        let start = exact(&grid, &Bell, 0.0);
        let lapped = exact(&grid, &Bell, 1.0);

        for (a, b) in start.iter().zip(&lapped) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }
}
