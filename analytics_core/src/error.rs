//! Error types for the analytics core.
//!
//! Errors here mean the *caller* did something wrong (out-of-range index,
//! impossible state pair, misshaped array) or the deployment configuration is
//! unusable. A clock that has no answer at an instant is not an error: the
//! mappers return `Option::None` for that case, and callers must handle it.

/// Result type for analytics-core operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    /// An integer input fell outside its documented closed range.
    #[error("{name} out of range: got {value}, expected {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An argument combination that has no meaning (e.g. a self-transition
    /// passed to transition indexing, or a state count outside 2..=10).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dense array whose length does not match its declared state count.
    /// The array must not be read positionally; recovery (typically
    /// re-zeroing) is the aggregation layer's job.
    #[error(
        "corrupt analytics array: expected {expected} cells for {num_states} states, found {actual}"
    )]
    CorruptArray {
        num_states: u8,
        expected: usize,
        actual: usize,
    },

    /// Deployment configuration is missing or unparseable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AnalyticsError {
    /// Create an out-of-range error.
    pub fn out_of_range(name: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            name,
            value,
            min,
            max,
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a corrupt-array error.
    pub fn corrupt_array(num_states: u8, expected: usize, actual: usize) -> Self {
        Self::CorruptArray {
            num_states,
            expected,
            actual,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
