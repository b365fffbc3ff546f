//! Error types for bloomtrace operations.
//!
//! The fallible surface is small by design: construction and tuning validate
//! their parameters up front, while `insert`, `contains`, and `diagnose`
//! are infallible once a filter exists.
//!
//! # Error Propagation
//!
//! ```
//! use bloomtrace::{Result, TrackedBloomFilter};
//!
//! fn build_filter(size: usize) -> Result<TrackedBloomFilter> {
//!     let filter = TrackedBloomFilter::new(size, 3)?;
//!     Ok(filter)
//! }
//! # assert!(build_filter(128).is_ok());
//! # assert!(build_filter(0).is_err());
//! ```

use std::fmt;

/// Result type alias for bloomtrace operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BloomTraceError`].
///
/// # Examples
/// ```
/// use bloomtrace::{BloomTraceError, Result};
///
/// fn validate_size(size: usize) -> Result<()> {
///     if size == 0 {
///         return Err(BloomTraceError::invalid_filter_size(size));
///     }
///     Ok(())
/// }
/// # assert!(validate_size(128).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, BloomTraceError>;

/// Errors that can occur during filter construction or tuning.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Each variant carries the rejected value for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloomTraceError {
    /// Bit array size is invalid.
    ///
    /// The filter requires a positive bit-array length. A zero-size filter
    /// cannot represent any membership information, so construction rejects
    /// it rather than silently substituting a default.
    InvalidFilterSize {
        /// The invalid size that was provided.
        size: usize,
    },

    /// Element count for the hash-count tuner is invalid.
    ///
    /// The tuner needs at least one trial insertion to measure collisions;
    /// a zero count is rejected before any filter is constructed.
    InvalidElementCount {
        /// The invalid count that was provided.
        count: usize,
    },
}

impl fmt::Display for BloomTraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Size must be greater than 0.",
                    size
                )
            }
            Self::InvalidElementCount { count } => {
                write!(
                    f,
                    "Invalid element count: {}. Tuning requires at least one trial element.",
                    count
                )
            }
        }
    }
}

impl std::error::Error for BloomTraceError {}

impl BloomTraceError {
    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidElementCount` error.
    #[must_use]
    pub fn invalid_element_count(count: usize) -> Self {
        Self::InvalidElementCount { count }
    }
}
