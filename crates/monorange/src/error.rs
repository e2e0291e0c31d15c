use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for monorange operations.
///
/// Every variant describes a malformed argument. Out-of-range values, exact
/// boundary hits and single-element sequences are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Index range errors
    #[error("Sequence must contain at least one value")]
    EmptySequence,

    #[error("Interval must contain exactly two values, got {len}")]
    IntervalLength { len: usize },

    // Gap errors
    #[error("Sample interval must be finite and positive, got {0}")]
    InvalidSampleInterval(f64),

    #[error("Gap threshold must be finite and positive, got {0}")]
    InvalidGapThreshold(f64),

    #[error("Cannot infer a sample interval: no finite non-zero spacing between samples")]
    UndeterminedSampleInterval,
}

impl Error {
    /// Whether this error belongs to the invalid-argument kind.
    ///
    /// Currently true for every variant.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptySequence
                | Self::IntervalLength { .. }
                | Self::InvalidSampleInterval(_)
                | Self::InvalidGapThreshold(_)
                | Self::UndeterminedSampleInterval
        )
    }
}
