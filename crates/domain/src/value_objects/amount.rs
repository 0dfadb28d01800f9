use crate::constants::{SECONDS_PER_YEAR, WEI_PER_ETH};
use crate::error::RewardRateError;
use crate::value_objects::parse_decimal;
use crate::value_objects::percentage::Percentage;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use serde::{Serialize, Serializer};
use std::fmt;

/// An amount in the smallest unit of an 18-decimal currency.
///
/// Unbounded and signed, so any finite TVL (including negative) flows
/// through the calculation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WeiAmount(pub BigInt);

impl WeiAmount {
    pub fn new(raw: impl Into<BigInt>) -> Self {
        Self(raw.into())
    }

    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Converts whole units (e.g. ETH) into wei, truncating toward zero.
    ///
    /// The product with `10^18` is taken in `f64` before truncation, so
    /// `0.1` converts to exactly `100000000000000000` while values that are
    /// not representable keep their float error.
    pub fn from_base_units(base_units: f64) -> Result<Self, RewardRateError> {
        truncate_to_wei(base_units * WEI_PER_ETH as f64, "tvl_wei")
    }

    /// Scales this amount by a yield, truncating toward zero.
    ///
    /// The amount is widened to `f64` first, as the yield is a float.
    pub fn apply_yield(&self, apy: Percentage) -> Result<Self, RewardRateError> {
        let amount = self.0.to_f64().unwrap_or(f64::NAN);
        truncate_to_wei(amount * apy.fraction(), "annual_rewards_wei")
    }

    /// Spreads an annual amount over [`SECONDS_PER_YEAR`] with floor division.
    pub fn per_second_over_year(&self) -> Self {
        Self(self.0.div_floor(&BigInt::from(SECONDS_PER_YEAR)))
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }
}

impl fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as a decimal string; JSON numbers lose precision past 2^53.
impl Serialize for WeiAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Parses whole-unit text such as `1000`, `1_000` or ` 0.5 ` into an `f64`.
///
/// # Errors
///
/// Returns [`RewardRateError::InvalidNumber`] when the trimmed text is not a
/// decimal number.
pub fn parse_base_units(input: &str) -> Result<f64, RewardRateError> {
    parse_decimal(input.trim())
}

// An integral finite f64 converts to BigInt exactly.
fn truncate_to_wei(value: f64, what: &'static str) -> Result<WeiAmount, RewardRateError> {
    BigInt::from_f64(value.trunc())
        .filter(|_| value.is_finite())
        .map(WeiAmount)
        .ok_or(RewardRateError::NotFinite { what })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_units() {
        let wei = WeiAmount::from_base_units(1000.0).unwrap();
        assert_eq!(wei, WeiAmount::new(1_000_000_000_000_000_000_000i128));

        let wei = WeiAmount::from_base_units(0.1).unwrap();
        assert_eq!(wei, WeiAmount::new(100_000_000_000_000_000i64));

        assert_eq!(WeiAmount::from_base_units(0.0).unwrap(), WeiAmount::zero());
    }

    #[test]
    fn test_from_base_units_truncates_toward_zero() {
        // 1.5e-18 * 1e18 is 1.5 in f64
        assert_eq!(WeiAmount::from_base_units(1.5e-18).unwrap(), WeiAmount::new(1));
        assert_eq!(WeiAmount::from_base_units(-1.5e-18).unwrap(), WeiAmount::new(-1));
    }

    #[test]
    fn test_from_base_units_beyond_128_bits() {
        let wei = WeiAmount::from_base_units(1e21).unwrap();
        assert_eq!(wei.to_string(), "999999999999999939709166371603178586112");
    }

    #[test]
    fn test_from_base_units_not_finite() {
        // 1e300 * 1e18 overflows to infinity
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            assert_eq!(
                WeiAmount::from_base_units(value),
                Err(RewardRateError::NotFinite { what: "tvl_wei" })
            );
        }
    }

    #[test]
    fn test_apply_yield_keeps_float_error() {
        let tvl = WeiAmount::from_base_units(1.5).unwrap();
        let annual = tvl.apply_yield(Percentage::from_fraction(0.07)).unwrap();
        // 1.5e18 * 0.07 is not exact in f64
        assert_eq!(annual, WeiAmount::new(105_000_000_000_000_016i64));
    }

    #[test]
    fn test_apply_yield_nan() {
        let tvl = WeiAmount::from_base_units(1.0).unwrap();
        assert_eq!(
            tvl.apply_yield(Percentage::from_fraction(f64::NAN)),
            Err(RewardRateError::NotFinite {
                what: "annual_rewards_wei"
            })
        );
    }

    #[test]
    fn test_per_second_over_year_floors() {
        let annual = WeiAmount::new(80_000_000_000_000_000_000i128);
        assert_eq!(annual.per_second_over_year(), WeiAmount::new(2_536_783_358_701i64));

        let annual = WeiAmount::new(31_535_999);
        assert_eq!(annual.per_second_over_year(), WeiAmount::zero());

        let annual = WeiAmount::new(-80_000_000_000_000_000i64);
        assert_eq!(annual.per_second_over_year(), WeiAmount::new(-2_536_783_359i64));
    }

    #[test]
    fn test_parse_base_units() {
        assert_eq!(parse_base_units(" 1000 \n").unwrap(), 1000.0);
        assert_eq!(parse_base_units("1e3").unwrap(), 1000.0);
        assert_eq!(parse_base_units("1_000").unwrap(), 1000.0);
        assert!(matches!(
            parse_base_units("ten"),
            Err(RewardRateError::InvalidNumber { .. })
        ));
        assert!(parse_base_units("").is_err());
    }
}
