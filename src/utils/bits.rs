//! Bit-width and bit-reversal helpers for the candidate byte extractor.
//!
//! Reversal here is over the significant bits of a value only. No fixed
//! width is assumed, so `0b110` reverses to `0b011` and not to a 7-bit
//! pattern.

/// Returns the number of bits required to represent the given number.
///
/// # Parameters
/// - `num`: The number to analyze.
///
/// # Returns
/// The number of significant bits (`0` for zero).
pub(crate) fn bits_required(num: u64) -> u32 {
    u64::BITS - num.leading_zeros()
}

/// Reverses the significant bits of `value`.
///
/// Equivalent to writing `value` as a minimal-width binary string,
/// reversing the string, and parsing it back. Trailing zeros of the input
/// become leading zeros of the output and are therefore dropped.
///
/// # Parameters
/// - `value`: The value whose significant bits are reversed.
///
/// # Returns
/// The bit-reversed value, never wider than `value`.
pub(crate) fn reverse_significant_bits(value: u64) -> u64 {
    let width = bits_required(value);
    if width == 0 {
        return 0;
    }
    value.reverse_bits() >> (u64::BITS - width)
}
