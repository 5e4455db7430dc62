use crate::Error;

/// Uniformly spaced sample points on the closed unit interval.
///
/// A grid with `N` intervals holds `N + 1` coordinates. The first is exactly
/// `0.0` and the last is exactly `1.0`; on a periodic domain these two points
/// coincide, so field values stored at them are kept equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    coordinates: Vec<f64>,
}

impl Grid {
    /// Builds a grid with `intervals` uniform intervals over `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `intervals` is zero.
    pub fn new(intervals: usize) -> Result<Self, Error> {
        if intervals < 1 {
            return Err(Error::invalid("intervals", "must be at least 1"));
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = 1.0 / intervals as f64;

        #[allow(clippy::cast_precision_loss)]
        let mut coordinates: Vec<f64> = (0..=intervals).map(|i| i as f64 * spacing).collect();
        coordinates[intervals] = 1.0;

        Ok(Self { coordinates })
    }

    /// Returns the number of intervals `N`.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.coordinates.len() - 1
    }

    /// Returns the number of points, `N + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always `false`; a valid grid has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns the uniform spacing `dx = 1 / N`.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let intervals = self.intervals() as f64;
        1.0 / intervals
    }

    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coordinates.iter().copied()
    }

    /// Returns every coordinate moved by `-distance`.
    ///
    /// Shifted coordinates are not wrapped; periodic profiles take care of that.
    #[must_use]
    pub fn shifted_back(&self, distance: f64) -> Vec<f64> {
        self.iter().map(|x| x - distance).collect()
    }
}

impl AsRef<[f64]> for Grid {
    fn as_ref(&self) -> &[f64] {
        &self.coordinates
    }
}
