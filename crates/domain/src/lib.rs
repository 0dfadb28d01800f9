//! Domain model for staking pool reward emission.
//!
//! Converts an expected TVL and an APY into the per-second reward rate an
//! `addPool` call expects:
//! - Percent parsing (`8`, `8%`, ` 8 % `)
//! - Smallest-unit amounts with truncating float conversion
//! - Reward rate quotes with floor division over a 365-day year

/// Prelude module for convenient imports.
pub mod prelude;

/// Unit and time constants.
pub mod constants;
/// Domain error type.
pub mod error;
/// Reward rate arithmetic.
pub mod math;
/// Scalar value objects.
pub mod value_objects;
