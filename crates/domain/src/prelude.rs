//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use reward_rate_domain::prelude::*;
//! ```

// Constants
pub use crate::constants::{ETH_DECIMALS, SECONDS_PER_YEAR, WEI_PER_ETH};

// Errors
pub use crate::error::RewardRateError;

// Math
pub use crate::math::reward_rate::RewardRateQuote;

// Value objects
pub use crate::value_objects::amount::{WeiAmount, parse_base_units};
pub use crate::value_objects::percentage::Percentage;
