//! Constant-time range-counting statistics over bounded positive integers.
//!
//! Values are collected once with a [`DataCapture`] and then queried
//! repeatedly through an immutable [`Stats`] built from it. Building walks
//! the occurrence counters in a single forward pass; the [`less`],
//! [`greater`] and [`between`] queries afterwards are O(1) lookups into the
//! precomputed per-value [`Triad`]s.
//!
//! [`less`]: Stats::less
//! [`greater`]: Stats::greater
//! [`between`]: Stats::between
//!
//! # Examples
//!
//! ```
//! use capture_stats::DataCapture;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut capture = DataCapture::new();
//! for value in [3, 9, 3, 4, 6] {
//!     capture.add(value)?;
//! }
//!
//! let stats = capture.build_stats();
//! assert_eq!(stats.less(4), 2);
//! assert_eq!(stats.between(3, 6)?, 4);
//! assert_eq!(stats.greater(4), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod capture;
mod error;
mod stats;

pub use capture::{DataCapture, DEFAULT_MAX_VALUE};
pub use error::{CaptureError, QueryError};
pub use stats::{Stats, Triad};
