pub mod error;
pub mod libraries;

pub use error::{ErrorCode, Result};
pub use libraries::*;
