//! _This is a part of **thresheld**. For more information, head to the
//! [thresheld](https://crates.io/crates/thresheld) crate homepage._
//!
//! Prime-field arithmetic over arbitrary-precision integers, backed by GMP through the `rug`
//! crate. Every operation reduces its result into the canonical range $[0, p)$ and never leaves
//! exact integer arithmetic.

pub mod primes;

use crate::primes::REPS;
use rug::integer::IsPrime;
use rug::Integer;
use thresheld_traits::randomness::GeneralRng;
use thresheld_traits::randomness::SecureRng;
use thresheld_traits::SharingError;

/// A finite field of prime order, within which all secret-sharing arithmetic takes place. The
/// modulus is fixed at construction and shared read-only by every operation on the field.
///
/// ```
/// use rug::Integer;
/// use thresheld_field::PrimeField;
///
/// let field = PrimeField::new(Integer::from(13)).unwrap();
/// assert_eq!(field.add(&Integer::from(9), &Integer::from(7)), Integer::from(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: Integer,
}

impl PrimeField {
    /// Creates a field of order `modulus`, which must be an odd prime. Primality is checked with
    /// 25 Miller-Rabin repetitions. The two-element field is rejected up front: even the smallest
    /// threshold needs two distinct nonzero x-coordinates, and $\mathbb{F}_2$ only has one.
    pub fn new(modulus: Integer) -> Result<PrimeField, SharingError> {
        if modulus <= 2 || modulus.is_probably_prime(REPS) == IsPrime::No {
            return Err(SharingError::InvalidPrime);
        }

        Ok(PrimeField { modulus })
    }

    /// The prime order of this field.
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Maps any integer, including negative ones, onto its canonical representative in $[0, p)$.
    pub fn reduce(&self, value: &Integer) -> Integer {
        let mut reduced = Integer::from(value % &self.modulus);

        if reduced < 0 {
            reduced += &self.modulus;
        }

        reduced
    }

    /// Returns whether `value` is a canonical field element, so whether it lies in $[0, p)$.
    pub fn contains(&self, value: &Integer) -> bool {
        *value >= 0 && *value < self.modulus
    }

    /// Computes $a + b \bmod p$.
    pub fn add(&self, a: &Integer, b: &Integer) -> Integer {
        self.reduce(&Integer::from(a + b))
    }

    /// Computes $a - b \bmod p$.
    pub fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        self.reduce(&Integer::from(a - b))
    }

    /// Computes $-a \bmod p$.
    pub fn neg(&self, a: &Integer) -> Integer {
        self.reduce(&Integer::from(-a))
    }

    /// Computes $a \cdot b \bmod p$.
    pub fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        self.reduce(&Integer::from(a * b))
    }

    /// Computes the multiplicative inverse of `value`: the unique field element $x$ satisfying
    /// $\mathit{value} \cdot x \equiv 1 \pmod{p}$, found with the extended Euclidean algorithm.
    /// Zero has no inverse, so inverting anything congruent to zero returns `DivisionByZero`.
    ///
    /// ```
    /// use rug::Integer;
    /// use thresheld_field::PrimeField;
    ///
    /// let field = PrimeField::new(Integer::from(7)).unwrap();
    /// assert_eq!(field.invert(&Integer::from(3)).unwrap(), Integer::from(5));
    /// ```
    pub fn invert(&self, value: &Integer) -> Result<Integer, SharingError> {
        self.reduce(value)
            .invert(&self.modulus)
            .map_err(|_| SharingError::DivisionByZero)
    }

    /// Samples a uniformly random field element in $[0, p)$ using a cryptographic RNG.
    pub fn random_element<R: SecureRng>(&self, rng: &mut GeneralRng<R>) -> Integer {
        Integer::from(self.modulus.random_below_ref(&mut rng.rug_rng()))
    }
}

/// The default field has order $2^{127} - 1$, a Mersenne prime large enough for 15-byte secrets
/// while keeping share arithmetic cheap.
impl Default for PrimeField {
    fn default() -> Self {
        PrimeField {
            modulus: primes::mersenne_127(),
        }
    }
}
