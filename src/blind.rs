use crate::arith::{modinv, modpow};
use crate::error::Result;
use num_bigint_dig::BigUint;

/// Blind `message` for the keypair `(e, n)`:
/// `I_m = (I * factor^e) mod n`.
///
/// `factor` must be coprime to `n` and known only to the caller; this
/// is not re-verified here. The formal check happens in [`demask`],
/// which is the first point that actually needs the inverse. A factor
/// must never be reused across unrelated maskings.
pub fn mask(message: &BigUint, factor: &BigUint, e: &BigUint, n: &BigUint) -> Result<BigUint> {
    let factor_e = modpow(factor, e, n)?;
    log::debug!("masking under a {}-bit modulus", n.bits());
    Ok((message * factor_e) % n)
}

/// Remove the blinding layer:
/// `I = (I_m * factor^-1) mod n`.
///
/// Fails with [`crate::Error::NoInverse`] when `factor` is not
/// invertible modulo `n`; the run cannot continue and the caller must
/// restart with a fresh factor.
pub fn demask(masked: &BigUint, factor: &BigUint, n: &BigUint) -> Result<BigUint> {
    let factor_inv = modinv(factor, n)?;
    Ok((masked * factor_inv) % n)
}

/// `S = message^d mod n`.
///
/// The message domain is the caller's responsibility: values at or
/// above `n` alias under the modulus and signing stops being
/// injective.
pub fn sign(message: &BigUint, d: &BigUint, n: &BigUint) -> Result<BigUint> {
    modpow(message, d, n)
}

/// `signature^e mod n`; inverts [`sign`] when `(e, n)` matches the
/// signing keypair and the original message was below `n`.
pub fn unsign(signature: &BigUint, e: &BigUint, n: &BigUint) -> Result<BigUint> {
    modpow(signature, e, n)
}

/// Element-wise [`sign`], preserving order and length.
pub fn sign_list(messages: &[BigUint], d: &BigUint, n: &BigUint) -> Result<Vec<BigUint>> {
    messages.iter().map(|m| sign(m, d, n)).collect()
}

/// Element-wise [`unsign`], preserving order and length.
pub fn unsign_list(signatures: &[BigUint], e: &BigUint, n: &BigUint) -> Result<Vec<BigUint>> {
    signatures.iter().map(|s| unsign(s, e, n)).collect()
}
