use crate::{Error, Grid, Profile};

/// Three time levels of a scalar field sampled on a [`Grid`].
///
/// The buffers are allocated once, when the field is seeded. Each step reads
/// the `previous` and `current` levels, writes the whole `next` level, and then
/// [`rotate`](FieldState::rotate)s: `current` becomes `previous`, `next` becomes
/// `current`, and the old `previous` buffer is reused as the new `next`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    /// Ordered as `[previous, current, next]`.
    buffers: [Vec<f64>; 3],
    level: usize,
}

/// Disjoint borrows of the three time levels for a single step.
///
/// A stepper reads `previous` and `current` and writes only `next`, so no value
/// written during a step can feed into another value of the same step.
#[derive(Debug)]
pub struct Levels<'a> {
    pub previous: &'a [f64],
    pub current: &'a [f64],
    pub next: &'a mut [f64],
}

impl FieldState {
    /// Seeds both stored levels with `profile` evaluated on `grid`.
    ///
    /// The value at `x = 1` is replaced with the value at `x = 0`, since the two
    /// points are the same on a periodic domain. Profiles like [`Bell`] only
    /// agree there up to rounding.
    ///
    /// [`Bell`]: crate::Bell
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the profile does not return one
    /// value per grid point.
    pub fn seed<P: Profile + ?Sized>(grid: &Grid, profile: &P) -> Result<Self, Error> {
        let mut initial = profile.evaluate(grid.coordinates());
        if initial.len() != grid.len() {
            return Err(Error::LengthMismatch {
                expected: grid.len(),
                actual: initial.len(),
            });
        }
        let end = initial.len() - 1;
        initial[end] = initial[0];

        let next = vec![0.0; initial.len()];
        Ok(Self {
            buffers: [initial.clone(), initial, next],
            level: 0,
        })
    }

    /// Time level held in `current`; zero right after seeding.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of stored points per level, `N + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers[1].len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers[1].is_empty()
    }

    #[must_use]
    pub fn previous(&self) -> &[f64] {
        &self.buffers[0]
    }

    #[must_use]
    pub fn current(&self) -> &[f64] {
        &self.buffers[1]
    }

    /// Borrows the levels for writing the next step.
    pub fn levels_mut(&mut self) -> Levels<'_> {
        let [previous, current, next] = &mut self.buffers;
        Levels {
            previous,
            current,
            next,
        }
    }

    /// Promotes `next` to `current` and `current` to `previous`.
    ///
    /// Only the buffer handles move; no values are copied.
    pub fn rotate(&mut self) {
        self.buffers.rotate_left(1);
        self.level += 1;
    }

    /// Returns `true` if the duplicated end point of `current` matches the first.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_periodic(&self) -> bool {
        let current = self.current();
        match (current.first(), current.last()) {
            (Some(first), Some(last)) => first == last || (first.is_nan() && last.is_nan()),
            _ => true,
        }
    }

    /// Consumes the field and returns the `current` level.
    #[must_use]
    pub fn into_current(self) -> Vec<f64> {
        let [_, current, _] = self.buffers;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Bell;

    #[test]
    fn seeding_fills_two_identical_levels() {
        let grid = Grid::new(8).unwrap();

        let field = FieldState::seed(&grid, &Bell).unwrap();

        assert_eq!(field.level(), 0);
        assert_eq!(field.len(), 9);
        assert_eq!(field.previous(), field.current());
        assert_eq!(
            &field.current()[..8],
            &Bell.evaluate(grid.coordinates())[..8]
        );
        assert!(field.is_periodic());
    }

    #[test]
    fn rotate_promotes_next() {
        let grid = Grid::new(2).unwrap();
        let mut field = FieldState::seed(&grid, &|x: f64| x).unwrap();

        field.levels_mut().next.copy_from_slice(&[7.0, 8.0, 7.0]);
        field.rotate();

        assert_eq!(field.level(), 1);
        assert_eq!(field.previous(), &[0.0, 0.5, 0.0]);
        assert_eq!(field.current(), &[7.0, 8.0, 7.0]);

        // The old `previous` buffer comes back around as `next`.
        let levels = field.levels_mut();
        assert_eq!(levels.next, &[0.0, 0.5, 0.0]);
    }

    #[test]
    fn rotation_reuses_allocations() {
        let grid = Grid::new(4).unwrap();
        let mut field = FieldState::seed(&grid, &Bell).unwrap();
        let before: Vec<*const f64> = field.buffers.iter().map(|b| b.as_ptr()).collect();

        field.rotate();
        field.rotate();
        field.rotate();

        let after: Vec<*const f64> = field.buffers.iter().map(|b| b.as_ptr()).collect();
        assert_eq!(before, after);
        assert_eq!(field.level(), 3);
    }

    #[test]
    fn seeding_pins_the_duplicated_end_point() {
        let grid = Grid::new(2).unwrap();
        let field = FieldState::seed(&grid, &|x: f64| x).unwrap();

        assert_eq!(field.current(), &[0.0, 0.5, 0.0]);
        assert!(field.is_periodic());
    }

    #[test]
    fn detects_broken_periodicity() {
        let grid = Grid::new(2).unwrap();
        let mut field = FieldState::seed(&grid, &Bell).unwrap();

        field.levels_mut().next.copy_from_slice(&[1.0, 2.0, 3.0]);
        field.rotate();

        assert!(!field.is_periodic());
    }

    #[test]
    fn rejects_profile_with_wrong_length() {
        struct Short;
        impl Profile for Short {
            fn value(&self, _x: f64) -> f64 {
                0.0
            }
            fn evaluate(&self, _xs: &[f64]) -> Vec<f64> {
                vec![0.0]
            }
        }

        let grid = Grid::new(4).unwrap();
        let result = FieldState::seed(&grid, &Short);

        assert_eq!(
            result,
            Err(Error::LengthMismatch {
                expected: 5,
                actual: 1
            })
        );
    }
}
