#![doc = include_str!("../README.md")]
#![warn(missing_docs, unused_imports)]

pub use thresheld_schemes::encoding;
pub use thresheld_schemes::shamir;
pub use thresheld_field;
pub use thresheld_traits;
