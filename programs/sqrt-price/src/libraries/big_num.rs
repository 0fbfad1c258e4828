//! 256 bit words for on-chain sqrt prices
//! Pools store sqrtPriceX96 as uint160 inside a 256 bit slot
use crate::error::ErrorCode;
use num_bigint::BigUint;
use num_traits::Zero;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

const WORD_BITS: u32 = 64;

/// Conversion to U256 with overflow checking
pub fn biguint_to_u256(value: &BigUint) -> crate::error::Result<U256> {
    if value.bits() > 256 {
        return Err(ErrorCode::U256Overflow);
    }
    let mut words = [0u64; 4];
    for (i, digit) in value.iter_u64_digits().enumerate() {
        words[i] = digit;
    }
    Ok(U256(words))
}

pub fn u256_to_biguint(value: U256) -> BigUint {
    value
        .0
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, word| (acc << WORD_BITS) + *word)
}
