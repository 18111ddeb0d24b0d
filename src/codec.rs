use crate::error::{Error, Result};
use num_bigint_dig::BigUint;
use num_traits::Zero;

/// Width in decimal digits of the zero-padded nonce tag field.
///
/// Invertibility of [`pack`] rests entirely on this width being fixed
/// and agreed by both sides; it is not negotiable per record.
pub const TAG_WIDTH: usize = 20;

/// Concatenate the decimal form of `payload` with `tag` rendered as a
/// fixed [`TAG_WIDTH`]-digit zero-padded field, then parse the whole
/// numeral as one integer.
///
/// A tag needing more than [`TAG_WIDTH`] digits is rejected with
/// [`Error::EncodingOverflow`] rather than silently truncated, since
/// truncation would break invertibility without any visible failure.
pub fn pack(payload: &BigUint, tag: &BigUint) -> Result<BigUint> {
    let tag_digits = tag.to_str_radix(10);
    if tag_digits.len() > TAG_WIDTH {
        return Err(Error::EncodingOverflow(tag.clone()));
    }
    let record = format!(
        "{}{:0>width$}",
        payload.to_str_radix(10),
        tag_digits,
        width = TAG_WIDTH
    );
    Ok(BigUint::parse_bytes(record.as_bytes(), 10).unwrap())
}

/// Exact inverse of [`pack`]: the last [`TAG_WIDTH`] digits are the
/// tag, everything before them is the payload.
pub fn unpack(record: &BigUint) -> (BigUint, BigUint) {
    let digits = record.to_str_radix(10);
    if digits.len() <= TAG_WIDTH {
        // a zero payload loses its leading digit when the packed
        // numeral is parsed, leaving only the tag field
        return (BigUint::zero(), record.clone());
    }
    let (payload, tag) = digits.split_at(digits.len() - TAG_WIDTH);
    (
        BigUint::parse_bytes(payload.as_bytes(), 10).unwrap(),
        BigUint::parse_bytes(tag.as_bytes(), 10).unwrap(),
    )
}
