//! Lenient base64 decoding.

use crate::quad::{decode_quad, QuadAccumulator};
use crate::table::is_base64_byte;
use crate::Base64Error;

/// Upper bound on the decoded size of `n` input characters: `3 * (n / 4)`.
///
/// # Example
///
/// ```
/// use wolf_base64::decoded_len_estimate;
///
/// assert_eq!(decoded_len_estimate(3), 0);
/// assert_eq!(decoded_len_estimate(8), 6);
/// ```
#[inline]
pub fn decoded_len_estimate(n: usize) -> usize {
    (n / 4) * 3
}

/// Decodes base64 text into bytes.
///
/// Accepts anything that derefs to bytes, so both `&str` and `&[u8]` work.
/// Decoding never fails on data:
///
/// - whitespace and any byte outside the alphabet and `=` are skipped;
/// - `=` counts as a zero sextet wherever it appears, and only suppresses
///   output bytes at positions 2 and 3 of its own quad;
/// - 1 to 3 characters left over after the last complete quad are dropped.
///
/// # Example
///
/// ```
/// use wolf_base64::from_base64;
///
/// assert_eq!(from_base64("TWFu"), b"Man");
/// assert_eq!(from_base64("SGVs bG8="), b"Hello");
/// assert_eq!(from_base64("QQ"), b"");
/// ```
pub fn from_base64<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(decoded_len_estimate(input.len()));
    decode_into(input, &mut out);
    out
}

/// Like [`from_base64`], but reports a failed output allocation as an error
/// instead of aborting.
///
/// # Errors
///
/// Returns [`Base64Error::OutOfMemory`] if the output buffer cannot be reserved.
pub fn try_from_base64<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, Base64Error> {
    let input = input.as_ref();
    let requested = decoded_len_estimate(input.len());
    let mut out = Vec::new();
    out.try_reserve_exact(requested)
        .map_err(|source| Base64Error::OutOfMemory { requested, source })?;
    decode_into(input, &mut out);
    Ok(out)
}

/// Appends decoded bytes to `out`. The estimate reserved by the callers
/// bounds the output, so `out` never grows past it.
fn decode_into(input: &[u8], out: &mut Vec<u8>) {
    let mut acc = QuadAccumulator::new();
    let mut stray = 0usize;

    for &c in input {
        if !is_base64_byte(c) {
            if !c.is_ascii_whitespace() {
                stray += 1;
            }
            continue;
        }
        if let Some(quad) = acc.push(c) {
            decode_quad(quad, out);
        }
    }

    if stray > 0 {
        log::debug!("skipped {stray} non-base64 bytes");
    }
    if acc.pending() > 0 {
        log::debug!(
            "discarded {} trailing base64 chars of an incomplete quad",
            acc.pending()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(from_base64(""), b"");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(from_base64("Zg=="), b"f");
        assert_eq!(from_base64("Zm8="), b"fo");
        assert_eq!(from_base64("Zm9v"), b"foo");
        assert_eq!(from_base64("Zm9vYmFy"), b"foobar");
    }

    #[test]
    fn test_accepts_bytes_and_str() {
        assert_eq!(from_base64(b"TWFu".as_slice()), from_base64("TWFu"));
        assert_eq!(from_base64(String::from("TWFu")), b"Man");
    }

    #[test]
    fn test_vertical_tab_and_form_feed_are_skipped() {
        assert_eq!(from_base64("TW\x0bFu\x0c"), b"Man");
    }

    #[test]
    fn test_high_bytes_are_skipped() {
        assert_eq!(from_base64([0xff, b'T', 0x80, b'W', b'F', b'u', 0xc3]), b"Man");
    }

    #[test]
    fn test_partial_quad_dropped() {
        assert_eq!(from_base64("TWFuT"), b"Man");
        assert_eq!(from_base64("TWFuTW"), b"Man");
        assert_eq!(from_base64("TWFuTWF"), b"Man");
    }

    #[test]
    fn test_output_within_estimate() {
        let input = "TWFu TWE= TQ== !! QQ";
        let out = from_base64(input);
        let compacted = input.bytes().filter(|&b| is_base64_byte(b)).count();
        assert!(out.len() <= decoded_len_estimate(compacted));
    }

    #[test]
    fn test_try_matches_infallible() {
        let input = "SGVs\r\nbG8s IHdv!cmxk";
        assert_eq!(try_from_base64(input).unwrap(), from_base64(input));
    }
}
