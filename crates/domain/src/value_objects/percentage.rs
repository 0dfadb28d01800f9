use crate::error::RewardRateError;
use crate::value_objects::parse_decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A yield expressed as a fraction (`0.08` for 8%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Percentage(pub f64);

impl Percentage {
    /// Parses percentage text such as `8`, `8%` or ` 8 % ` into a fraction.
    ///
    /// Surrounding whitespace and a single trailing `%` are ignored. The
    /// remaining text must be a decimal number; the value is not range-checked.
    ///
    /// # Errors
    ///
    /// Returns [`RewardRateError::InvalidNumber`] when the numeric part is
    /// empty or not a number.
    pub fn parse(input: &str) -> Result<Self, RewardRateError> {
        let mut text = input.trim();
        if let Some(stripped) = text.strip_suffix('%') {
            text = stripped.trim();
        }
        let value = parse_decimal(text)?;
        Ok(Self(value / 100.0))
    }

    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }
}

impl FromStr for Percentage {
    type Err = RewardRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}
