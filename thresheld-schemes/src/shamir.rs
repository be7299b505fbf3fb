//! Shamir's threshold secret-sharing scheme over a prime field. Splitting embeds the secret as
//! the constant term of a random polynomial and hands out points on that polynomial; any
//! `threshold` points determine the polynomial again, so Lagrange interpolation at $x = 0$
//! recovers the secret.
//!
//! ```
//! use rand_core::OsRng;
//! use rug::Integer;
//! use thresheld_schemes::shamir::ShamirScheme;
//! use thresheld_traits::randomness::GeneralRng;
//! use thresheld_traits::secret_sharing::ThresholdSecretSharing;
//!
//! let mut rng = GeneralRng::new(OsRng);
//! let scheme = ShamirScheme::default();
//!
//! let shares = scheme.split(&Integer::from(123456789), 3, 5, &mut rng).unwrap();
//!
//! assert_eq!(scheme.reconstruct(&shares[..3]).unwrap(), Integer::from(123456789));
//! ```

use crate::encoding;
use crate::polynomial::Polynomial;
use rug::Integer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thresheld_field::PrimeField;
use thresheld_traits::randomness::GeneralRng;
use thresheld_traits::randomness::SecureRng;
use thresheld_traits::secret_sharing::ThresholdSecretSharing;
use thresheld_traits::SharingError;

/// Shamir's (t, n) secret-sharing scheme: a secret is split into $n$ shares such that any $t$ of
/// them reconstruct it, while $t - 1$ shares leave every candidate secret equally likely. The
/// scheme holds the prime field that bounds its secrets: only values in $[0, p)$ can be split.
///
/// As an example we split a wallet password into 5 shares, any 3 of which recover it.
/// ```
/// # use rand_core::OsRng;
/// # use thresheld_schemes::shamir::ShamirScheme;
/// # use thresheld_traits::randomness::GeneralRng;
/// let mut rng = GeneralRng::new(OsRng);
/// let scheme = ShamirScheme::default();
///
/// let shares = scheme.split_bytes(b"wallet password", 3, 5, &mut rng).unwrap();
///
/// assert_eq!(scheme.reconstruct_bytes(&shares[2..5]).unwrap(), b"wallet password");
/// ```
#[derive(Debug, Clone)]
pub struct ShamirScheme {
    field: PrimeField,
}

/// One share of a split secret: a point $(x, f(x))$ on the secret polynomial. A share on its own
/// reveals nothing; shares are independent, order-insensitive, and immutable once produced.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct Share {
    /// The x-coordinate the polynomial was evaluated at, never 0.
    pub x: u64,
    /// The polynomial value at `x`, a canonical field element.
    pub y: Integer,
}

impl ShamirScheme {
    /// Creates a scheme over the field of order `prime`, which must be an odd prime. The prime
    /// bounds the secrets this scheme can split.
    pub fn new(prime: Integer) -> Result<ShamirScheme, SharingError> {
        Ok(ShamirScheme {
            field: PrimeField::new(prime)?,
        })
    }

    /// The prime field this scheme shares secrets over.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Splits a byte secret by first encoding it as a field element. The encoded value must fit
    /// below the field modulus, so with the default field the secret can be at most 15 bytes.
    pub fn split_bytes<R: SecureRng>(
        &self,
        secret: &[u8],
        threshold: usize,
        share_count: usize,
        rng: &mut GeneralRng<R>,
    ) -> Result<Vec<Share>, SharingError> {
        let secret = encoding::encode_secret(secret, &self.field)?;
        self.split(&secret, threshold, share_count, rng)
    }

    /// Reconstructs a byte secret that was split with [`Self::split_bytes`]. Leading zero bytes
    /// of the original secret are not recovered, as the encoding is minimal.
    pub fn reconstruct_bytes(&self, shares: &[Share]) -> Result<Vec<u8>, SharingError> {
        let secret = self.reconstruct(shares)?;

        Ok(encoding::decode_secret(&secret))
    }
}

/// The default scheme shares secrets over the field of order $2^{127} - 1$.
impl Default for ShamirScheme {
    fn default() -> Self {
        ShamirScheme {
            field: PrimeField::default(),
        }
    }
}

impl ThresholdSecretSharing for ShamirScheme {
    type Secret = Integer;
    type Share = Share;

    fn split<R: SecureRng>(
        &self,
        secret: &Integer,
        threshold: usize,
        share_count: usize,
        rng: &mut GeneralRng<R>,
    ) -> Result<Vec<Share>, SharingError> {
        if threshold < 2 || threshold > share_count {
            return Err(SharingError::InvalidThreshold {
                threshold,
                share_count,
            });
        }

        // The x-coordinates 1..=n must stay nonzero and pairwise distinct as field elements
        if &Integer::from(share_count as u64) >= self.field.modulus() {
            return Err(SharingError::TooManyShares { share_count });
        }

        if !self.field.contains(secret) {
            return Err(SharingError::SecretTooLarge);
        }

        let polynomial = Polynomial::random(secret.clone(), threshold, &self.field, rng);

        Ok((1..=share_count)
            .map(|x| Share {
                x: x as u64,
                y: polynomial.evaluate(&Integer::from(x as u64), &self.field),
            })
            .collect())
    }

    fn reconstruct(&self, shares: &[Share]) -> Result<Integer, SharingError> {
        if shares.len() < 2 {
            return Err(SharingError::InsufficientShares(shares.len()));
        }

        let mut seen_xs = HashSet::new();
        for share in shares {
            if !seen_xs.insert(share.x) {
                return Err(SharingError::DuplicateShareX(share.x));
            }
        }

        let mut secret = Integer::new();

        for (i, share) in shares.iter().enumerate() {
            let x_i = Integer::from(share.x);

            let mut numerator = Integer::from(1);
            let mut denominator = Integer::from(1);

            for (j, other) in shares.iter().enumerate() {
                if i == j {
                    continue;
                }

                let x_j = Integer::from(other.x);
                numerator = self.field.mul(&numerator, &self.field.neg(&x_j));
                denominator = self.field.mul(&denominator, &self.field.sub(&x_i, &x_j));
            }

            // Distinct u64 x-coordinates can still collide modulo a small field, in which case
            // the denominator vanishes and inversion reports DivisionByZero
            let basis = self.field.mul(&numerator, &self.field.invert(&denominator)?);
            secret = self.field.add(&secret, &self.field.mul(&basis, &share.y));
        }

        Ok(secret)
    }
}
