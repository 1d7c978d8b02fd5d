//! Pseudo-random byte extraction from trajectory coordinates.
//!
//! Each coordinate is scaled, truncated, and reduced to 7 bits; the
//! significant bits are then reversed. Two trajectories are combined by
//! XOR into one candidate code point in `0..=127`.
//!
//! The reversal is over the minimal binary width of the value, not a fixed
//! 7 bits: `5` (`101`) stays `5`, `64` (`1000000`) becomes `1`. Padding to
//! 7 bits would change every generated password.

use crate::utils::bits;

/// Scale applied before truncation to reach the noisy low-order digits.
const SCALE: f64 = 1e14;

/// Candidates are reduced modulo 128 (7 bits).
const CANDIDATE_MODULUS: i64 = 128;

/// Converts a trajectory coordinate into a value in `0..=127`.
///
/// 1. Multiplies `x` by `10^14` and truncates toward zero.
/// 2. Takes the floored remainder modulo 128.
/// 3. Reverses the significant bits of the remainder.
///
/// # Examples
///
/// ```
/// use chaotic_passgen::random::prbg::to_candidate_byte;
///
/// // 64e-14 scales to 64 = 0b1000000, which reverses to 0b1.
/// assert_eq!(to_candidate_byte(64e-14), 1);
/// ```
pub fn to_candidate_byte(x: f64) -> u8 {
    let scaled = (x * SCALE) as i64;
    let remainder = scaled.rem_euclid(CANDIDATE_MODULUS) as u64;
    bits::reverse_significant_bits(remainder) as u8
}

/// Combines two coordinates into one candidate code point.
///
/// # Returns
/// `to_candidate_byte(x) ^ to_candidate_byte(y)`, always in `0..=127`.
pub fn combine(x: f64, y: f64) -> u8 {
    to_candidate_byte(x) ^ to_candidate_byte(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_high_bit_reverses_to_one() {
        assert_eq!(to_candidate_byte(64e-14), 1);
        // Only the value mod 128 matters: 192 = 128 + 64.
        assert_eq!(to_candidate_byte(192e-14), 1);
    }

    #[test]
    fn test_palindrome_unchanged() {
        assert_eq!(to_candidate_byte(5e-14), 5);
        assert_eq!(to_candidate_byte(127e-14), 127);
    }

    #[test]
    fn test_unpadded_reversal() {
        // 6 = "110" -> "011" = 3; a 7-bit reversal would give 48.
        assert_eq!(to_candidate_byte(6e-14), 3);
    }

    #[test]
    fn test_zero_maps_to_zero() {
        assert_eq!(to_candidate_byte(0.0), 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 5.9 scaled truncates to 5, not 6.
        assert_eq!(to_candidate_byte(5.9e-14), 5);
    }

    #[test]
    fn test_negative_uses_floored_remainder() {
        // -64 mod 128 = 64 under a floored remainder.
        assert_eq!(to_candidate_byte(-64e-14), 1);
    }

    #[test]
    fn test_output_range() {
        let mut x = 0.0123456789;
        for _ in 0..1000 {
            assert!(to_candidate_byte(x) < 128);
            x = (x * 3.987654321).rem_euclid(1.0);
        }
    }

    #[test]
    fn test_combine_identical_is_zero() {
        for x in [0.0, 0.25, 0.5, 0.123456789, 0.999999, 64e-14] {
            assert_eq!(combine(x, x), 0, "combine(x, x) != 0 for x={}", x);
        }
    }

    #[test]
    fn test_combine_xor() {
        // 1 ^ 5 = 4
        assert_eq!(combine(64e-14, 5e-14), 4);
        assert_eq!(combine(5e-14, 0.0), 5);
    }
}
