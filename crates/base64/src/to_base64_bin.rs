//! Binary base64 encoding into a caller-supplied byte slice.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// Pre-computed two-character lookup table for base64 encoding.
/// Entry `i * 64 + j` holds the alphabet characters for sextets `i` and `j`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Length of the encoding of `n` input bytes: `4 * ceil(n / 3)`.
///
/// Saturates at `usize::MAX` so that a later reservation reports capacity
/// overflow instead of wrapping.
///
/// # Example
///
/// ```
/// use wolf_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
#[inline]
pub fn encoded_len(n: usize) -> usize {
    n.div_ceil(3).saturating_mul(4)
}

/// Encodes one group of 1 to 3 bytes into a quad, padding short groups with `=`.
#[inline]
pub(crate) fn encode_group(group: &[u8]) -> [u8; 4] {
    match *group {
        [o1, o2, o3] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
            [TABLE2[v1][0], TABLE2[v1][1], TABLE2[v2][0], TABLE2[v2][1]]
        }
        [o1, o2] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            [TABLE2[v1][0], TABLE2[v1][1], ALPHABET_BYTES[v2], PAD_BYTE]
        }
        [o1] => {
            let v1 = (o1 as usize) << 4;
            [TABLE2[v1][0], TABLE2[v1][1], PAD_BYTE, PAD_BYTE]
        }
        _ => unreachable!("base64 groups hold 1 to 3 bytes"),
    }
}

/// Encodes `src` into the start of `dest` using standard base64 with padding.
///
/// # Returns
///
/// The number of bytes written, always `encoded_len(src.len())`.
///
/// # Panics
///
/// Panics if `dest` is shorter than `encoded_len(src.len())`.
///
/// # Example
///
/// ```
/// use wolf_base64::to_base64_bin;
///
/// let data = b"hello";
/// let mut dest = vec![0u8; 100];
/// let len = to_base64_bin(data, &mut dest);
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn to_base64_bin(src: &[u8], dest: &mut [u8]) -> usize {
    let needed = encoded_len(src.len());
    assert!(
        dest.len() >= needed,
        "destination holds {} bytes, encoding needs {}",
        dest.len(),
        needed
    );

    for (group, quad) in src.chunks(3).zip(dest.chunks_exact_mut(4)) {
        quad.copy_from_slice(&encode_group(group));
    }

    needed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_group() {
        assert_eq!(&encode_group(b"Man"), b"TWFu");
    }

    #[test]
    fn two_byte_group_gets_one_pad() {
        assert_eq!(&encode_group(b"Ma"), b"TWE=");
    }

    #[test]
    fn one_byte_group_gets_two_pads() {
        assert_eq!(&encode_group(b"M"), b"TQ==");
    }

    #[test]
    fn all_ones() {
        assert_eq!(&encode_group(&[0xff, 0xff, 0xff]), b"////");
        assert_eq!(&encode_group(&[0xff]), b"/w==");
    }

    #[test]
    fn writes_nothing_for_empty_input() {
        let mut dest = [b'x'; 4];
        assert_eq!(to_base64_bin(b"", &mut dest), 0);
        assert_eq!(&dest, b"xxxx");
    }

    #[test]
    fn leaves_tail_of_dest_untouched() {
        let mut dest = [b'x'; 10];
        let len = to_base64_bin(b"fo", &mut dest);
        assert_eq!(len, 4);
        assert_eq!(&dest, b"Zm8=xxxxxx");
    }

    #[test]
    #[should_panic(expected = "encoding needs 8")]
    fn short_dest_panics() {
        let mut dest = [0u8; 4];
        to_base64_bin(b"foob", &mut dest);
    }

    #[test]
    fn encoded_len_saturates() {
        assert_eq!(encoded_len(usize::MAX), usize::MAX);
    }
}
