use num_bigint_dig::BigUint;
use thiserror::Error;

/// Specialisation of `std::Result`.
pub type Result<T, E = BlindSignatureError> = std::result::Result<T, E>;
pub type Error = BlindSignatureError;

#[derive(Error, Debug, PartialEq, Eq)]
/// error variants.
pub enum BlindSignatureError {
    #[error("no modular inverse of {value} exists modulo {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },

    #[error("modulus {0} is unusable, expected a value greater than 2")]
    InvalidModulus(BigUint),

    #[error("nonce tag {0} does not fit in the fixed-width tag field")]
    EncodingOverflow(BigUint),
}
