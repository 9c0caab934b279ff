use thiserror::Error;

/// An error returned when adding a value to a
/// [`DataCapture`](crate::DataCapture).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// The value lies outside of the supported domain.
    #[error("value {value} is outside of the supported domain 1..={max_value}")]
    OutOfDomain {
        /// The rejected value.
        value: i64,
        /// The upper bound of the supported domain.
        max_value: usize,
    },
}

/// An error returned by [`Stats`](crate::Stats) queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The left bound of a range query exceeds its right bound.
    #[error("invalid range: left bound {left} is greater than right bound {right}")]
    InvalidRange {
        /// The left (lower) bound of the query.
        left: i64,
        /// The right (upper) bound of the query.
        right: i64,
    },
}
