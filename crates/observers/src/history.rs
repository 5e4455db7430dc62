use advect_core::Observer;

use crate::traits::HasField;

/// A copy of one field level.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub step: usize,
    pub time: f64,
    pub values: Vec<f64>,
}

/// Copies every `k`-th field level, starting with step 0.
///
/// Useful for handing intermediate levels to a presentation layer; the final
/// level is always available from the solver's solution.
#[derive(Debug, Clone)]
pub struct History {
    every: usize,
    records: Vec<Record>,
}

impl History {
    /// Records steps `0, k, 2k, ...`. A stride of zero is treated as one.
    #[must_use]
    pub fn every(stride: usize) -> Self {
        Self {
            every: stride.max(1),
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn record<E: HasField>(&mut self, event: &E) {
        if event.step() % self.every == 0 {
            self.records.push(Record {
                step: event.step(),
                time: event.time(),
                values: event.field().to_vec(),
            });
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::every(1)
    }
}

impl<E: HasField, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E: HasField, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use advect_core::{Bell, RunConfig};
    use advect_solvers::ftbs;
    use approx::assert_relative_eq;

    #[test]
    fn records_every_kth_step() {
        let config = RunConfig::new(20, 0.5, 10);
        let mut history = History::every(4);

        let solution = ftbs::solve(&config, &Bell, &mut history).unwrap();

        let steps: Vec<usize> = history.records().iter().map(|r| r.step).collect();
        assert_eq!(steps, vec![0, 4, 8]);

        let last = &history.records()[2];
        assert_eq!(last.values.len(), 21);
        assert_relative_eq!(last.time, 8.0 * solution.dt);
    }

    #[test]
    fn first_record_is_the_seed() {
        let config = RunConfig::new(10, 0.5, 3);
        let mut history = History::default();

        ftbs::solve(&config, &Bell, &mut history).unwrap();

        let records = history.into_records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].time, 0.0);
        assert_eq!(records[0].values[10], records[0].values[0]);
    }

    #[test]
    fn zero_stride_records_everything() {
        let config = RunConfig::new(10, 0.5, 5);
        let mut history = History::every(0);

        ftbs::solve(&config, &Bell, &mut history).unwrap();

        assert_eq!(history.records().len(), 6);
    }
}
