use crate::error::QueryError;

/// Per-value statistics: how many collected values compare equal, less and
/// greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triad {
    /// Number of collected values equal to this value.
    pub equal: usize,
    /// Number of collected values less than this value.
    pub less: usize,
    /// Number of collected values greater than this value.
    pub greater: usize,
}

/// Precomputed range-counting statistics over a snapshot of collected values.
///
/// Built once by [`DataCapture::build_stats`](crate::DataCapture::build_stats)
/// and read-only afterwards, which also makes it safe to share across threads.
/// One [`Triad`] is stored per domain value, followed by a sentinel triad
/// representing "past the end of the domain"; every query resolves to a
/// single triad lookup.
///
/// Query values outside of the domain are clamped rather than rejected: a
/// value below the domain sees no lesser values, a value past the domain sees
/// no greater ones. Every triad satisfies
/// `less + equal + greater == total collected values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    running: Triad,
    triads: Vec<Triad>,
}

impl Stats {
    /// Computes the per-value triads in a single forward pass over the
    /// occurrence counters.
    ///
    /// The accumulator tracks the previous value's equal-count, the number
    /// of values seen so far and the number of values not yet seen, which is
    /// exactly the triad of the value under the cursor.
    pub(crate) fn new(total: usize, counts: &[usize]) -> Self {
        let mut running = Triad {
            equal: 0,
            less: 0,
            greater: total,
        };
        let mut triads = Vec::with_capacity(counts.len() + 1);
        for &count in counts {
            let prev_equal = running.equal;
            running.equal = count;
            running.less += prev_equal;
            running.greater -= count;
            triads.push(running);
        }
        // Sentinel answering queries at or past the end of the domain.
        triads.push(Triad {
            equal: 0,
            less: total,
            greater: 0,
        });
        Stats { running, triads }
    }

    /// How many collected values are less than `value`.
    pub fn less(&self, value: i64) -> usize {
        self.triads[self.clamp(value)].less
    }

    /// How many collected values are greater than `value`.
    pub fn greater(&self, value: i64) -> usize {
        self.triads[self.clamp(value)].greater
    }

    /// How many collected values lie in `left..=right`, bounds included.
    ///
    /// Both bounds are clamped to the domain independently, so a query over
    /// a range enclosing the whole domain counts every collected value.
    /// Fails with [`QueryError::InvalidRange`] when `left > right`; ordering
    /// is checked on the raw bounds, before clamping.
    pub fn between(&self, left: i64, right: i64) -> Result<usize, QueryError> {
        if left > right {
            return Err(QueryError::InvalidRange { left, right });
        }
        let left = &self.triads[self.clamp(left)];
        let right = &self.triads[self.clamp(right)];
        // (values >= left) minus (values > right).
        Ok(left.equal + left.greater - right.greater)
    }

    /// The final accumulator value and the per-value triads, for diagnostics
    /// and testing.
    pub fn state(&self) -> (Triad, &[Triad]) {
        (self.running, &self.triads)
    }

    /// Maps a query value onto a valid triad index.
    ///
    /// Values below the domain map to index 0, values at or past the end of
    /// the domain map to the trailing sentinel.
    fn clamp(&self, value: i64) -> usize {
        let last = self.triads.len() - 1;
        if value < 0 {
            0
        } else if value as u64 >= last as u64 {
            last
        } else {
            value as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_maps_any_value_onto_a_valid_triad_index() {
        // Domain 1..=10: triads for values 0..=10 plus the sentinel at 11.
        let stats = Stats::new(0, &[0; 11]);
        assert_eq!(stats.clamp(i64::MIN), 0);
        assert_eq!(stats.clamp(-1), 0);
        assert_eq!(stats.clamp(0), 0);
        assert_eq!(stats.clamp(1), 1);
        assert_eq!(stats.clamp(10), 10);
        assert_eq!(stats.clamp(11), 11);
        assert_eq!(stats.clamp(12), 11);
        assert_eq!(stats.clamp(i64::MAX), 11);
    }
}
