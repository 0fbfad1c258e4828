//! Helper functions for unit tests
use super::fixed_point_96::Q96;

/// Approximate sqrt price from reserves of token_1 and token_0
///
/// Where token_0 is base and token_1 is quote, both with the same decimals.
/// Only good to f64 precision, use it to sanity check the exact encoding.
///
/// # Formula
/// `√P * 2^96 = √(reserve_1 / reserve_0) * 2^96`
///
pub fn approx_price_sqrt_x96(reserve_1: u64, reserve_0: u64) -> f64 {
    (reserve_1 as f64 / reserve_0 as f64).sqrt() * Q96 as f64
}
