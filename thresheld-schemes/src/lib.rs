/// Conversions between byte secrets and the field elements that schemes operate on.
pub mod encoding;

/// Shamir's threshold secret-sharing scheme.
pub mod shamir;

mod polynomial;

pub use thresheld_traits;
