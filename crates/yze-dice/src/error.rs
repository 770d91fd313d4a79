//! Error types for the dice engine.

/// Errors that can occur while building or driving a dice pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YzeError {
    /// A die was requested with a size other than 6, 8, 10 or 12.
    #[error("die size should be one of 6, 8, 10, 12; got {0}")]
    InvalidDieSize(u32),

    /// A symbolic rating was not one of A, B, C, D (or absent).
    #[error("invalid rating '{0}': expected A, B, C, D or none")]
    InvalidRating(String),

    /// A pre-seeded face value is outside the range of its die.
    #[error("invalid {channel} value {value}: expected 1..={max}")]
    InvalidChannelValue {
        /// Name of the channel the value was supplied for.
        channel: &'static str,
        /// The offending face value.
        value: u32,
        /// Highest face the channel's die can show.
        max: u32,
    },

    /// A transition was requested before the pool was thrown.
    #[error("cannot {operation} a pool that has not been thrown")]
    NotThrown {
        /// The operation that was attempted.
        operation: &'static str,
    },
}

/// Convenience result type for dice engine operations.
pub type YzeResult<T> = Result<T, YzeError>;
