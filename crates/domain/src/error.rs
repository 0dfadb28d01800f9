//! Errors raised while parsing inputs or deriving amounts.

use thiserror::Error;

/// Errors produced by the reward rate domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardRateError {
    /// Input text is not a valid decimal number.
    #[error("invalid number: {input:?}")]
    InvalidNumber {
        /// The offending text after trimming.
        input: String,
    },
    /// A derived value is NaN or infinite.
    #[error("{what} is not a finite number")]
    NotFinite {
        /// Name of the value being derived.
        what: &'static str,
    },
}

impl RewardRateError {
    pub(crate) fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }
}
