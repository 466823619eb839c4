//! Reverse lookup from input byte to 6-bit value.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// One slot per possible input byte. `None` marks bytes outside the alphabet,
/// including the padding character.
static REVERSE: [Option<u8>; 256] = build_reverse();

const fn build_reverse() -> [Option<u8>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
}

/// Returns the 6-bit value of an alphabet byte, or `None` for any other byte.
///
/// # Example
///
/// ```
/// use wolf_base64::sextet;
///
/// assert_eq!(sextet(b'A'), Some(0));
/// assert_eq!(sextet(b'/'), Some(63));
/// assert_eq!(sextet(b'='), None);
/// ```
#[inline]
pub fn sextet(byte: u8) -> Option<u8> {
    REVERSE[byte as usize]
}

/// Whether a byte survives decode filtering: an alphabet byte or `=`.
#[inline]
pub fn is_base64_byte(byte: u8) -> bool {
    byte == PAD_BYTE || sextet(byte).is_some()
}
