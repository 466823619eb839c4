//! Quad accumulation for the decoder.
//!
//! Filtered characters are collected four at a time. A full quad is handed
//! back to the caller and the accumulator resets; whatever is still pending
//! when input runs out is dropped by the caller.

use crate::constants::PAD_BYTE;
use crate::table::sextet;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct QuadAccumulator {
    chars: [u8; 4],
    len: usize,
}

impl QuadAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds one filtered character. Returns the quad once it is complete.
    #[inline]
    pub(crate) fn push(&mut self, c: u8) -> Option<[u8; 4]> {
        self.chars[self.len] = c;
        self.len += 1;
        if self.len == 4 {
            self.len = 0;
            Some(self.chars)
        } else {
            None
        }
    }

    /// Characters accumulated towards an incomplete quad.
    pub(crate) fn pending(&self) -> usize {
        self.len
    }
}

/// Decodes one quad into 1 to 3 bytes.
///
/// `=` contributes a zero sextet wherever it sits. It suppresses byte 2 only
/// at index 2 and byte 3 only at index 3; byte 1 is always written.
#[inline]
pub(crate) fn decode_quad(quad: [u8; 4], out: &mut Vec<u8>) {
    let v = |c: u8| sextet(c).unwrap_or(0) as u32;
    let triple = (v(quad[0]) << 18) | (v(quad[1]) << 12) | (v(quad[2]) << 6) | v(quad[3]);

    out.push((triple >> 16) as u8);
    if quad[2] != PAD_BYTE {
        out.push((triple >> 8) as u8);
    }
    if quad[3] != PAD_BYTE {
        out.push(triple as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(quad: &[u8; 4]) -> Vec<u8> {
        let mut out = Vec::new();
        decode_quad(*quad, &mut out);
        out
    }

    #[test]
    fn accumulator_emits_every_fourth_char() {
        let mut acc = QuadAccumulator::new();
        assert_eq!(acc.push(b'T'), None);
        assert_eq!(acc.push(b'W'), None);
        assert_eq!(acc.push(b'F'), None);
        assert_eq!(acc.pending(), 3);
        assert_eq!(acc.push(b'u'), Some(*b"TWFu"));
        assert_eq!(acc.pending(), 0);
        assert_eq!(acc.push(b'Q'), None);
        assert_eq!(acc.pending(), 1);
    }

    #[test]
    fn full_quad() {
        assert_eq!(decode(b"TWFu"), b"Man");
    }

    #[test]
    fn one_pad() {
        assert_eq!(decode(b"TWE="), b"Ma");
    }

    #[test]
    fn two_pads() {
        assert_eq!(decode(b"TQ=="), b"M");
    }

    #[test]
    fn pad_only_at_index_2_still_emits_byte_3() {
        // 'A' = 0, so with '=' as zero the triple is 0x000000.
        assert_eq!(decode(b"AA=A"), [0x00, 0x00]);
    }

    #[test]
    fn leading_pads_count_as_zero() {
        assert_eq!(decode(b"===="), [0x00]);
        assert_eq!(decode(b"=Q=="), [0x01]);
    }
}
