use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrorCode>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    // the initial price must be in [MIN_SQRT_PRICE_X96, MAX_SQRT_PRICE_X96)
    #[error("sqrt_price_x96 out of range")]
    SqrtPriceX96,

    #[error("integer overflow when casting to U256")]
    U256Overflow,
}
