//! # Originality Perceptual Fingerprints
//!
//! This crate produces the two fingerprint kinds the originality engine
//! compares:
//!
//! - [`TextFingerprint`]: a 64-bit, term-frequency weighted SimHash built by
//!   [`TextFingerprintBuilder`] from a token stream.
//! - [`ImageFingerprint`]: a hex perceptual hash computed by an external
//!   hasher and validated by [`wrap_image_fingerprint`].
//!
//! ## Contract
//!
//! - Tokenization and stop words come from the `canonical` crate (or any
//!   other [`canonical::Tokenizer`]); this crate never segments text itself.
//! - Every operation is a pure function of its inputs: no I/O, no clocks in
//!   the output, no global state.
//!
//! Invariant: for the same text, tokenizer and stop-word set, the text
//! fingerprint is bit identical.
//!
//! ## Text pipeline
//!
//! 1. **Tokenize** with the builder's tokenizer.
//! 2. **Count** words whose trimmed length exceeds one character and which
//!    are not stop words.
//! 3. **Hash** each distinct word with FNV-1a (32 bits, per code point).
//! 4. **Vote**: each word adds `±freq` to all 64 accumulator slots, reading
//!    bit `i mod 32` of its hash for slot `i`.
//! 5. **Threshold**: slot > 0 sets the bit; ties stay 0.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use canonical::{SegmentTokenizer, StopWords};
//! use perceptual::TextFingerprintBuilder;
//!
//! let builder = TextFingerprintBuilder::new(
//!     Arc::new(SegmentTokenizer::default()),
//!     Arc::new(StopWords::from_lines("the\nof\n")),
//! );
//!
//! let fp = builder.build("The quick brown fox jumps over the lazy dog");
//! assert_eq!(fp.to_hex().len(), 16);
//! assert_eq!(builder.build("").to_hex(), "0000000000000000");
//! ```

mod error;
pub mod fingerprint;
mod hash;
mod image;
mod simhash;

pub use crate::error::{FingerprintError, MalformedReason};
pub use crate::fingerprint::{Fingerprint, FingerprintKind, ImageFingerprint, TextFingerprint};
pub use crate::hash::{fnv1a_32, FNV32_OFFSET_BASIS, FNV32_PRIME};
pub use crate::image::wrap_image_fingerprint;
pub use crate::simhash::{simhash, TextFingerprintBuilder, WordFrequencyTable};

/// Current text fingerprint algorithm version for this crate.
pub const TEXT_FINGERPRINT_VERSION: u16 = 1;

/// Human‑readable algorithm identifier.
pub const TEXT_FINGERPRINT_ALGORITHM: &str = "fnv1a32_tf_simhash64_v1";
