use advect_core::Observer;
use tracing::{Level, debug, enabled};

use crate::traits::HasField;

/// Logs the extent of each field level at `debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl Trace {
    fn log<E: HasField>(event: &E) {
        if enabled!(Level::DEBUG) {
            let (min, max) = event
                .field()
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                });
            debug!(step = event.step(), time = event.time(), min, max, "level");
        }
    }
}

impl<E: HasField, A> Observer<E, A> for Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        Self::log(event);
        None
    }
}

impl<E: HasField, A> Observer<E, A> for &mut Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        Trace::log(event);
        None
    }
}
