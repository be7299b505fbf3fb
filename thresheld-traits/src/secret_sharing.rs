use crate::randomness::GeneralRng;
use crate::randomness::SecureRng;
use crate::SharingError;

/// A threshold secret-sharing scheme is a system of methods to split a secret into shares that
/// are individually meaningless, but instead of requiring every share to recover the secret, we
/// require only a given number of them. If enough shares are brought together, they can be
/// combined into the original secret. Still, any smaller collection of shares reveals nothing.
///
/// We denote a threshold scheme using a tuple like (t, n). This means that t shares can
/// collectively reconstruct the secret, and that there are in total n shares.
///
/// The struct that implements a `ThresholdSecretSharing` scheme will hold the general parameters
/// of that scheme. Depending on the scheme, those parameters could play an important role in
/// deciding the level of security. As such, each scheme should clearly indicate these.
pub trait ThresholdSecretSharing {
    /// The type of secrets that this scheme can split.
    type Secret;
    /// The type of the shares that this scheme hands out.
    type Share;

    /// Splits `secret` into `share_count` shares, of which any `threshold` suffice to reconstruct
    /// the secret, using a cryptographic RNG.
    fn split<R: SecureRng>(
        &self,
        secret: &Self::Secret,
        threshold: usize,
        share_count: usize,
        rng: &mut GeneralRng<R>,
    ) -> Result<Vec<Self::Share>, SharingError>;

    /// Combines $t$ or more distinct shares back into the secret. It is the responsibility of the
    /// programmer to supply the right number of shares to this function: any 2 or more distinct
    /// shares combine into *some* value without an error, but only $t$ or more combine into the
    /// secret.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, SharingError>;
}
