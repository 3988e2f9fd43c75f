#[macro_use]
pub mod macros;

pub mod cmp;
pub mod error;
pub mod float;

pub use self::cmp::*;
pub use self::error::*;
pub use self::float::*;
