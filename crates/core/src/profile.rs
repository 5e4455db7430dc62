use std::f64::consts::PI;

/// A pure scalar function of position.
///
/// Profiles seed the initial field and, evaluated at `x - u * t`, give the
/// exact traveling-wave solution. Implementations must not carry hidden state:
/// [`evaluate`](Profile::evaluate) must agree element-wise with repeated calls
/// to [`value`](Profile::value).
///
/// Any `Fn(f64) -> f64` closure is a profile.
pub trait Profile {
    /// Returns the profile value at `x`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates the profile at every coordinate.
    fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}

impl<F> Profile for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A single `sin²` bump on the first half of each unit period.
///
/// ```text
/// φ(x) = sin²(2πx)   if x mod 1 < 0.5
///      = 0           otherwise
/// ```
///
/// The modulo is the Euclidean one, so coordinates shifted below zero wrap
/// into `[0, 1)` and the bump repeats with period one in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bell;

impl Profile for Bell {
    fn value(&self, x: f64) -> f64 {
        if x.rem_euclid(1.0) < 0.5 {
            (2.0 * PI * x).sin().powi(2)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bell_peaks_at_quarter() {
        assert_relative_eq!(Bell.value(0.25), 1.0);
        assert_relative_eq!(Bell.value(0.0), 0.0);
    }

    #[test]
    fn bell_is_zero_on_second_half() {
        for x in [0.5, 0.6, 0.75, 0.99] {
            assert_eq!(Bell.value(x), 0.0);
        }
    }

    #[test]
    fn negative_coordinates_wrap() {
        // -0.75 wraps to 0.25, inside the bump.
        assert_relative_eq!(Bell.value(-0.75), 1.0, epsilon = 1e-12);
        // -0.25 wraps to 0.75, outside it.
        assert_eq!(Bell.value(-0.25), 0.0);
    }

    #[test]
    fn bell_has_unit_period() {
        for x in [0.1, 0.3, 0.45] {
            assert_relative_eq!(Bell.value(x), Bell.value(x + 1.0), epsilon = 1e-12);
            assert_relative_eq!(Bell.value(x), Bell.value(x - 1.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn evaluate_matches_pointwise() {
        let xs = [-0.3, 0.0, 0.1, 0.25, 0.5, 0.8, 1.0];

        let values = Bell.evaluate(&xs);

        assert_eq!(values.len(), xs.len());
        for (x, v) in xs.iter().zip(&values) {
            assert_eq!(Bell.value(*x), *v);
        }
    }

    #[test]
    fn closures_are_profiles() {
        let ramp = |x: f64| 2.0 * x;

        assert_eq!(ramp.evaluate(&[0.0, 0.5]), vec![0.0, 1.0]);
    }
}
