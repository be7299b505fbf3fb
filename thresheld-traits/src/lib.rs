#![warn(missing_docs, unused_imports)]

//! _This is a part of **thresheld**. For more information, head to the
//! [thresheld](https://crates.io/crates/thresheld) crate homepage._
//!
//! General traits for threshold secret-sharing schemes, the error type shared by all scheme
//! operations, and random number generation that is consistent with the arithmetic dependencies.

/// Random number generation that is consistent with the dependencies' requirements.
pub mod randomness;

/// General notion of a threshold secret-sharing scheme.
pub mod secret_sharing;

use thiserror::Error;

/// General error that arises when splitting a secret into shares, or reconstructing a secret from
/// a set of shares, cannot proceed. Every variant is fatal for the call that raised it: a failing
/// operation never returns a partial share vector or a guessed secret.
#[derive(Error, Debug)]
pub enum SharingError {
    /// The threshold $t$ must be at least 2 and at most the number of shares $n$.
    #[error("threshold must lie between 2 and the share count, got threshold {threshold} for {share_count} shares")]
    InvalidThreshold {
        /// The threshold requested by the caller.
        threshold: usize,
        /// The number of shares requested by the caller.
        share_count: usize,
    },

    /// Issuing this many shares would wrap the x-coordinates $1, \ldots, n$ around the field
    /// modulus, making some of them zero or equal as field elements.
    #[error("cannot issue {share_count} shares over this field: the x-coordinates 1..={share_count} would wrap around the modulus")]
    TooManyShares {
        /// The number of shares requested by the caller.
        share_count: usize,
    },

    /// The secret is not a canonical field element: it is negative or at least the field modulus.
    /// The secret is never silently reduced; choose a larger prime instead.
    #[error("secret is negative or too large for the field; it must lie in [0, modulus)")]
    SecretTooLarge,

    /// Reconstruction was attempted with fewer than 2 shares.
    #[error("reconstruction requires at least 2 shares, got {0}")]
    InsufficientShares(usize),

    /// Two of the supplied shares carry the same x-coordinate.
    #[error("two shares carry the same x-coordinate {0}")]
    DuplicateShareX(u64),

    /// A multiplicative inverse of zero was requested. During reconstruction this occurs when two
    /// distinct x-coordinates coincide modulo the field modulus.
    #[error("zero has no multiplicative inverse in the field")]
    DivisionByZero,

    /// The field modulus handed to a scheme is not an odd prime.
    #[error("the field modulus must be an odd prime")]
    InvalidPrime,
}
