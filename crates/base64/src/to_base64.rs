//! Standard base64 encoding to a `String`.

use crate::to_base64_bin::{encode_group, encoded_len};
use crate::Base64Error;

/// Encodes a byte slice to a standard base64 string.
///
/// Never fails for any input. Empty input yields an empty string with no
/// padding; otherwise the output is `4 * ceil(n / 3)` characters long.
///
/// # Example
///
/// ```
/// use wolf_base64::to_base64;
///
/// assert_eq!(to_base64(b"Man"), "TWFu");
/// assert_eq!(to_base64(b"Ma"), "TWE=");
/// assert_eq!(to_base64(b"M"), "TQ==");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    push_base64(data, &mut out);
    out
}

/// Like [`to_base64`], but reports a failed output allocation as an error
/// instead of aborting.
///
/// # Errors
///
/// Returns [`Base64Error::OutOfMemory`] if the output buffer cannot be reserved.
pub fn try_to_base64(data: &[u8]) -> Result<String, Base64Error> {
    let requested = encoded_len(data.len());
    let mut out = String::new();
    out.try_reserve_exact(requested)
        .map_err(|source| Base64Error::OutOfMemory { requested, source })?;
    push_base64(data, &mut out);
    Ok(out)
}

fn push_base64(data: &[u8], out: &mut String) {
    for group in data.chunks(3) {
        for &c in &encode_group(group) {
            out.push(c as char);
        }
    }
    log::trace!("encoded {} bytes into {} base64 chars", data.len(), out.len());
}
