//! Base64 encoding and decoding utilities.
//!
//! This crate provides standard-alphabet base64 with padding:
//! - Encoding to a `String` or into a caller-supplied byte slice
//! - Lenient decoding that skips stray bytes and drops an incomplete
//!   trailing quad instead of failing
//! - `try_*` variants that surface allocation failure as [`Base64Error`]
//!
//! # Example
//!
//! ```
//! use wolf_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded);
//! assert_eq!(decoded.as_slice(), data);
//! ```

use std::collections::TryReserveError;

mod codec;
mod constants;
mod from_base64;
mod quad;
mod table;
mod to_base64;
mod to_base64_bin;

pub use codec::Codec;
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use from_base64::{decoded_len_estimate, from_base64, try_from_base64};
pub use table::{is_base64_byte, sextet};
pub use to_base64::{to_base64, try_to_base64};
pub use to_base64_bin::{encoded_len, to_base64_bin};

/// Error type for base64 operations.
///
/// No input can make encoding or decoding fail; the only error is running
/// out of memory for the output buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The output buffer could not be reserved.
    #[error("failed to reserve {requested} bytes for base64 output")]
    OutOfMemory {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
