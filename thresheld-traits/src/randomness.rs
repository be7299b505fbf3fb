use rand_core::{CryptoRng, RngCore};
use rug::rand::{ThreadRandGen, ThreadRandState};

/// Marker trait for cryptographically secure RNGs: any RNG that implements both `RngCore` and
/// `CryptoRng` qualifies. Plain statistical RNGs do not implement `CryptoRng` and are therefore
/// rejected at compile time.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRng for T {}

/// General RNG that can be used for all dependencies.
///
/// Randomness is always injected by the caller; the library itself never reaches for an ambient
/// source of entropy. Production code typically wraps `OsRng`, while deterministic tests wrap a
/// seeded RNG such as `rand::rngs::StdRng`.
///
/// ```
/// use rand_core::OsRng;
/// use thresheld_traits::randomness::GeneralRng;
///
/// let mut rng = GeneralRng::new(OsRng);
/// ```
pub struct GeneralRng<R: SecureRng> {
    rng_wrapper: RngWrapper<R>,
}

impl<R: SecureRng> GeneralRng<R> {
    /// Creates a new `GeneralRng` based on an RNG that implements both `RngCore` and `CryptoRng`
    /// to ensure that the underlying RNG is indeed cryptographically secure.
    pub fn new(rng: R) -> Self {
        GeneralRng {
            rng_wrapper: RngWrapper { rng },
        }
    }

    /// Exposes the underlying RNG.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng_wrapper.rng
    }

    /// Creates a RNG for the `rug` crate that is only suitable for a single thread.
    pub fn rug_rng(&mut self) -> ThreadRandState<'_> {
        ThreadRandState::new_custom(&mut self.rng_wrapper)
    }
}

struct RngWrapper<R: SecureRng> {
    rng: R,
}

impl<R: SecureRng> ThreadRandGen for RngWrapper<R> {
    fn gen(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
