//! Field-prime helpers: the default 127-bit Mersenne modulus and uniform generation of custom
//! field primes.

use rug::integer::IsPrime;
use rug::Integer;
use thresheld_traits::randomness::GeneralRng;
use thresheld_traits::randomness::SecureRng;

pub(crate) const REPS: u32 = 25;

/// The Mersenne prime $2^{127} - 1$, the default secret-sharing field modulus. Byte secrets of up
/// to 15 bytes always encode below it.
pub fn mersenne_127() -> Integer {
    (Integer::from(1) << 127) - Integer::from(1)
}

/// Generates a uniformly random prime number of a given bit length, suitable as a custom field
/// modulus. The number contains `bit_length` bits, of which the first and the last bit are
/// always 1.
pub fn gen_field_prime<R: SecureRng>(bit_length: u32, rng: &mut GeneralRng<R>) -> Integer {
    debug_assert!(bit_length >= 2);

    loop {
        let mut candidate = Integer::from(Integer::random_bits(bit_length, &mut rng.rug_rng()));

        let set_bits = (Integer::from(1) << (bit_length - 1)) + Integer::from(1);
        candidate |= set_bits;

        if candidate.is_probably_prime(REPS) != IsPrime::No {
            return candidate;
        }
    }
}
