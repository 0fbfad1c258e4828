pub mod big_num;
pub mod fixed_point_96;
pub mod sqrt_math;
pub mod sqrt_price_math;

#[cfg(test)]
mod test_utils;

pub use big_num::*;
pub use fixed_point_96::*;
pub use sqrt_math::*;
pub use sqrt_price_math::*;
