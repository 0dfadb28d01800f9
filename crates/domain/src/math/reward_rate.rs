//! Reward rate derivation.
//!
//! TVL is converted to wei, scaled by the yield to an annual amount, then
//! floor-divided by [`SECONDS_PER_YEAR`](crate::constants::SECONDS_PER_YEAR).
//! Float intermediates follow IEEE-754 `f64` and are truncated toward zero.

use crate::error::RewardRateError;
use crate::value_objects::amount::WeiAmount;
use crate::value_objects::percentage::Percentage;
use serde::Serialize;
use tracing::{debug, warn};

/// One computed reward rate with its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardRateQuote {
    /// Expected TVL in whole units.
    pub tvl_eth: f64,
    /// Annual yield as a fraction.
    #[serde(rename = "apy_fraction")]
    pub apy: Percentage,
    /// TVL in wei.
    pub tvl_wei: WeiAmount,
    /// Rewards paid over one year, in wei.
    pub annual_rewards_wei: WeiAmount,
    /// Emission rate in wei per second.
    pub reward_rate_wei_per_sec: WeiAmount,
}

impl RewardRateQuote {
    /// Computes the quote for an expected TVL and yield.
    ///
    /// Negative TVL is accepted and yields a negative rate.
    ///
    /// # Errors
    ///
    /// Returns [`RewardRateError::NotFinite`] when an intermediate is NaN or
    /// infinite.
    pub fn compute(tvl_eth: f64, apy: Percentage) -> Result<Self, RewardRateError> {
        if tvl_eth < 0.0 {
            warn!(tvl_eth, "Negative TVL produces a negative reward rate");
        }

        let tvl_wei = WeiAmount::from_base_units(tvl_eth)?;
        let annual_rewards_wei = tvl_wei.apply_yield(apy)?;
        let reward_rate_wei_per_sec = annual_rewards_wei.per_second_over_year();

        debug!(
            tvl_eth,
            apy = apy.fraction(),
            %tvl_wei,
            %annual_rewards_wei,
            %reward_rate_wei_per_sec,
            "Computed reward rate"
        );

        Ok(Self {
            tvl_eth,
            apy,
            tvl_wei,
            annual_rewards_wei,
            reward_rate_wei_per_sec,
        })
    }

    /// The `addPool` call to paste into a transaction tool, with a zero
    /// address placeholder.
    pub fn add_pool_call(&self) -> String {
        format!("addPool(address(0), {})", self.reward_rate_wei_per_sec)
    }
}
