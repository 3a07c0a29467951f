//! Weighted modulo-11 check character.

use crate::era::Era;

const CHECK_ALPHABET: &[u8; 11] = b"0123456789X";

/// Computes the check character for the digits preceding it.
///
/// `leading` is paired position-for-position with the era's weights; any
/// surplus characters are ignored and non-digits count as zero.
///
/// ```
/// use patnum_core::{expected_check_char, Era};
///
/// assert_eq!(expected_check_char(Era::Modern, "200810000835"), '1');
/// assert_eq!(expected_check_char(Era::Legacy, "85100007"), 'X');
/// ```
pub fn expected_check_char(era: Era, leading: &str) -> char {
    let sum: u32 = leading
        .chars()
        .zip(era.weights())
        .map(|(c, weight)| c.to_digit(10).unwrap_or(0) * weight)
        .sum();
    let index = (sum % 11) as usize;
    tracing::trace!(?era, sum, index, "computed weighted checksum");
    char::from(CHECK_ALPHABET[index])
}
