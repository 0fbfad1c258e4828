use super::big_num::{biguint_to_u256, U256};
use super::fixed_point_96::Q192_RESOLUTION;
use super::sqrt_math::isqrt;
use crate::error::{ErrorCode, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// The lowest sqrt price a pool can be initialized with, the price at MIN_TICK
pub const MIN_SQRT_PRICE_X96: U256 = U256([4295128739, 0, 0, 0]);
/// The sqrt price at MAX_TICK, 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_PRICE_X96: U256 = U256([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);

/// 10^77 is the largest power of ten a uint256 token amount can hold
pub const MAX_DECIMALS: u32 = 77;

/// Scales a reserve to its smallest unit, `reserve * 10^decimals`
///
/// Negative reserves and decimals outside `0..=MAX_DECIMALS` are rejected.
pub fn get_token_amount(reserve: &BigInt, decimals: i32) -> Result<BigUint> {
    let reserve = reserve
        .to_biguint()
        .ok_or(ErrorCode::InvalidInput("reserve must not be negative"))?;
    let decimals =
        u32::try_from(decimals).map_err(|_| ErrorCode::InvalidInput("decimals must not be negative"))?;
    if decimals > MAX_DECIMALS {
        return Err(ErrorCode::InvalidInput("decimals must not exceed 77"));
    }
    Ok(reserve * BigUint::from(10u32).pow(decimals))
}

/// Gets the price of token_1 in terms of token_0 scaled by 2^192
///
/// Rounds down, the remainder of the division is discarded.
///
/// # Formula
///
/// * `amount_0 = reserve_0 * 10^decimals_0`
/// * `amount_1 = reserve_1 * 10^decimals_1`
/// * `P * 2^192 = floor(amount_1 * 2^192 / amount_0)`
///
pub fn get_price_ratio_scaled(
    reserve_0: impl Into<BigInt>,
    reserve_1: impl Into<BigInt>,
    decimals_0: i32,
    decimals_1: i32,
) -> Result<BigUint> {
    let amount_0 = get_token_amount(&reserve_0.into(), decimals_0)?;
    let amount_1 = get_token_amount(&reserve_1.into(), decimals_1)?;
    if amount_0.is_zero() {
        return Err(ErrorCode::InvalidInput("token_0 reserve must not be zero"));
    }

    let numerator = amount_1 << Q192_RESOLUTION;
    let price_ratio_scaled = numerator / &amount_0;

    #[cfg(feature = "enable-log")]
    log::debug!(
        "amount_0:{}, price_ratio_scaled:{}",
        amount_0,
        price_ratio_scaled
    );
    Ok(price_ratio_scaled)
}

/// Encodes the pool price `reserve_1 / reserve_0` as a Q64.96 square root
///
/// The result `r` satisfies `r^2 <= P * 2^192 < (r + 1)^2` where `P * 2^192`
/// is [`get_price_ratio_scaled`], so it matches the integer sqrtPriceX96 a
/// pool expects for the same reserves.
///
/// # Formula
///
/// * `√P * 2^96 = √(amount_1 * 2^192 / amount_0)`
///
/// # Errors
///
/// `InvalidInput` when `reserve_0 * 10^decimals_0` is zero, any input is negative
/// or a decimals value exceeds `MAX_DECIMALS`.
///
pub fn encode_sqrt_price_x96(
    reserve_0: impl Into<BigInt>,
    reserve_1: impl Into<BigInt>,
    decimals_0: i32,
    decimals_1: i32,
) -> Result<BigUint> {
    let price_ratio_scaled = get_price_ratio_scaled(reserve_0, reserve_1, decimals_0, decimals_1)?;
    let sqrt_price_x96 = isqrt(&price_ratio_scaled);

    #[cfg(feature = "enable-log")]
    log::debug!("sqrt_price_x96:{}", sqrt_price_x96);
    Ok(sqrt_price_x96)
}

/// Checks a sqrt price is accepted as a pool's initial price and returns it as a U256 word
pub fn check_sqrt_price_x96(sqrt_price_x96: &BigUint) -> Result<U256> {
    let word = biguint_to_u256(sqrt_price_x96).map_err(|_| ErrorCode::SqrtPriceX96)?;
    // second inequality must be < because the price can never reach the price at the max tick
    if word < MIN_SQRT_PRICE_X96 || word >= MAX_SQRT_PRICE_X96 {
        return Err(ErrorCode::SqrtPriceX96);
    }
    Ok(word)
}

/// Encodes the reserves into the sqrt price used to initialize a pool
pub fn encode_pool_init_sqrt_price_x96(
    reserve_0: impl Into<BigInt>,
    reserve_1: impl Into<BigInt>,
    decimals_0: i32,
    decimals_1: i32,
) -> Result<U256> {
    let sqrt_price_x96 = encode_sqrt_price_x96(reserve_0, reserve_1, decimals_0, decimals_1)?;
    check_sqrt_price_x96(&sqrt_price_x96)
}

/// Lowercase hex with a `0x` prefix and no zero padding
pub fn format_sqrt_price_x96_hex(sqrt_price_x96: &BigUint) -> String {
    format!("{:#x}", sqrt_price_x96)
}
