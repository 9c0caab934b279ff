use crate::error::CaptureError;
use crate::stats::Stats;

/// The default upper bound of the supported value domain.
pub const DEFAULT_MAX_VALUE: usize = 999;

/// Collects bounded positive integers for later range-counting queries.
///
/// Insertion is O(1): the capture keeps one occurrence counter per domain
/// value plus a running total. [`build_stats`](Self::build_stats) derives an
/// immutable [`Stats`] from the counters collected so far.
#[derive(Debug, Clone)]
pub struct DataCapture {
    max_value: usize,
    counts: Vec<usize>,
    total: usize,
}

impl DataCapture {
    /// Creates an empty capture over the domain `1..=DEFAULT_MAX_VALUE`.
    pub fn new() -> Self {
        Self::with_max_value(DEFAULT_MAX_VALUE)
    }

    /// Creates an empty capture over the domain `1..=max_value`.
    ///
    /// The counter vector has `max_value + 1` slots so that counters are
    /// indexed directly by value; slot 0 is reserved and stays zero.
    pub fn with_max_value(max_value: usize) -> Self {
        Self {
            max_value,
            counts: vec![0; max_value + 1],
            total: 0,
        }
    }

    /// Adds a value to the working set.
    ///
    /// Fails with [`CaptureError::OutOfDomain`] for values outside of
    /// `1..=max_value`, leaving the capture untouched.
    pub fn add(&mut self, value: i64) -> Result<(), CaptureError> {
        if value < 1 || value > self.max_value as i64 {
            return Err(CaptureError::OutOfDomain {
                value,
                max_value: self.max_value,
            });
        }
        self.counts[value as usize] += 1;
        self.total += 1;
        Ok(())
    }

    /// Builds the statistics for the values collected so far.
    ///
    /// The returned [`Stats`] is an independent snapshot: values added
    /// afterwards do not affect it. Each call yields a fresh snapshot.
    pub fn build_stats(&self) -> Stats {
        Stats::new(self.total, &self.counts)
    }

    /// The upper bound of the supported value domain.
    pub fn max_value(&self) -> usize {
        self.max_value
    }

    /// The current `(total, counters)` state, for diagnostics and testing.
    pub fn state(&self) -> (usize, &[usize]) {
        (self.total, &self.counts)
    }
}

impl Default for DataCapture {
    fn default() -> Self {
        Self::new()
    }
}
