/// Seconds in a 365-day year. Leap years are not accounted for.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Decimals of the base currency.
pub const ETH_DECIMALS: u32 = 18;

/// Smallest units per whole base currency unit.
pub const WEI_PER_ETH: u128 = 10u128.pow(ETH_DECIMALS);
