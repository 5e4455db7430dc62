/// Watches a run level by level and may steer it.
///
/// A solver hands each event it produces to its observer. The observer can
/// inspect the field, record it, or log it, and returns `Some(action)` to ask
/// the solver for something specific, such as stopping before the remaining
/// steps. Returning `None` leaves the run untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` observes
/// nothing.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<usize, &'static str>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|step| observer.observe(step).is_some())
    }

    #[test]
    fn closures_can_stop_a_run() {
        let mut seen = 0;

        let stopped = drive(
            |step: &usize| {
                seen += 1;
                (*step == 3).then_some("stop")
            },
            10,
        );

        assert_eq!(stopped, Some(3));
        assert_eq!(seen, 4);
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), 10), None);
    }
}
