//! Per-word hashing for the text SimHash.
//!
//! # Algorithm
//!
//! ```text
//! h = 0x811c9dc5
//! for each char c: h = (h XOR code_point(c)) * 0x01000193  (mod 2^32)
//! ```
//!
//! This is FNV-1a over Unicode scalar values rather than UTF-8 bytes, so for
//! ASCII input it matches the published FNV-1a test vectors and for CJK text
//! each character contributes exactly one round. Changing either constant or
//! the per-char unit changes every stored text fingerprint.

/// FNV-1a 32-bit offset basis.
pub const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV32_PRIME: u32 = 0x0100_0193;

/// Hash a word with FNV-1a over its code points.
#[inline]
pub fn fnv1a_32(word: &str) -> u32 {
    word.chars().fold(FNV32_OFFSET_BASIS, |h, c| {
        (h ^ u32::from(c)).wrapping_mul(FNV32_PRIME)
    })
}
