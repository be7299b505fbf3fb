//! Reversible conversions between byte secrets and field elements. Bytes are read as one
//! big-endian unsigned integer; no character set is assumed, so textual secrets should be encoded
//! to bytes (for example as UTF-8) by the caller and decoded again after reconstruction.

use rug::integer::Order;
use rug::Integer;
use thresheld_field::PrimeField;
use thresheld_traits::SharingError;

/// Encodes a byte secret as a canonical element of `field` by interpreting the bytes as a
/// big-endian unsigned integer. A secret whose encoding does not fit below the field modulus is
/// rejected with `SecretTooLarge`, never truncated or reduced.
///
/// ```
/// use thresheld_field::PrimeField;
/// use thresheld_schemes::encoding::{decode_secret, encode_secret};
///
/// let field = PrimeField::default();
/// let element = encode_secret(b"wallet key", &field).unwrap();
///
/// assert_eq!(decode_secret(&element), b"wallet key");
/// ```
pub fn encode_secret(bytes: &[u8], field: &PrimeField) -> Result<Integer, SharingError> {
    let value = Integer::from_digits(bytes, Order::Msf);

    if !field.contains(&value) {
        return Err(SharingError::SecretTooLarge);
    }

    Ok(value)
}

/// Decodes a field element back into bytes: the minimal big-endian representation of the integer.
/// Zero decodes to the empty byte string, and leading zero bytes of the original secret are not
/// part of the minimal representation, so they do not reappear.
pub fn decode_secret(value: &Integer) -> Vec<u8> {
    value.to_digits::<u8>(Order::Msf)
}
