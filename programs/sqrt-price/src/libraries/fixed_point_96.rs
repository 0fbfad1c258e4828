/// A library for handling Q64.96 fixed point numbers
/// Used in sqrt_price_math.rs

pub const RESOLUTION: u8 = 96;
pub const Q96: u128 = 1u128 << RESOLUTION; // 2^96

/// `sqrt(P) * 2^96` squared carries a `2^192` scale
pub const Q192_RESOLUTION: u32 = 2 * RESOLUTION as u32;
