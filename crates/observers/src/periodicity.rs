use advect_core::Observer;
use tracing::error;

use crate::traits::HasField;

/// Checks that the duplicated end point of each level equals index 0.
///
/// The check is exact. Levels where both values are NaN count as periodic.
#[derive(Debug, Clone, Default)]
pub struct PeriodicityCheck {
    checked: usize,
    first_violation: Option<usize>,
}

impl PeriodicityCheck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels inspected.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Step of the first level whose end points differ, if any.
    #[must_use]
    pub fn first_violation(&self) -> Option<usize> {
        self.first_violation
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.first_violation.is_none()
    }

    #[allow(clippy::float_cmp)]
    fn record<E: HasField>(&mut self, event: &E) {
        self.checked += 1;
        let field = event.field();
        let (Some(first), Some(last)) = (field.first(), field.last()) else {
            return;
        };
        let coincide = first == last || (first.is_nan() && last.is_nan());
        if !coincide && self.first_violation.is_none() {
            error!(step = event.step(), first, last, "periodic end points diverged");
            self.first_violation = Some(event.step());
        }
    }
}

impl<E: HasField, A> Observer<E, A> for PeriodicityCheck {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut PeriodicityCheck` to be passed to solvers that take an
/// observer by value, so the result can be read after the solve completes.
impl<E: HasField, A> Observer<E, A> for &mut PeriodicityCheck {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
