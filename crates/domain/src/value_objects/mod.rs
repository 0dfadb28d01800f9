use crate::error::RewardRateError;

pub mod amount;
pub mod percentage;

/// Parses trimmed decimal text into an `f64`.
///
/// A `_` is accepted as a digit-group separator only when it sits between
/// two ASCII digits (`1_000`).
pub(crate) fn parse_decimal(input: &str) -> Result<f64, RewardRateError> {
    let invalid = || RewardRateError::invalid_number(input);
    let bytes = input.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let digit_before = i.checked_sub(1).is_some_and(|j| bytes[j].is_ascii_digit());
        let digit_after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !digit_before || !digit_after {
            return Err(invalid());
        }
    }
    input.replace('_', "").parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_separators() {
        assert_eq!(parse_decimal("1_000").unwrap(), 1000.0);
        assert_eq!(parse_decimal("1_0e1_0").unwrap(), 1e11);
        for input in ["_1", "1_", "1__0", "1_.5", "1._5", "1e_5"] {
            assert!(parse_decimal(input).is_err(), "{input:?} should be rejected");
        }
    }
}
