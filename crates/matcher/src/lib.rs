//! # Originality Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns pairs of fingerprints from the `perceptual` crate into
//! raw distances and bounded originality scores, and ranks a candidate
//! against a corpus of previously seen fingerprints. It does not decide
//! whether a submission is accepted; the scores feed whatever policy the
//! caller applies.
//!
//! ## Core Operations
//!
//! - [`distance`]: Hamming distance for text (XOR + popcount over 64 bits),
//!   differing-digit count for image hashes. Kind or width mismatches fail
//!   with [`MatchError::Incomparable`].
//! - [`score`]: maps `(distance, kind, width)` to a [`Score`] in
//!   [0.0, 100.0] with one decimal digit. Text scores saturate at half the
//!   width; image scores are linear.
//! - [`compare`]: both in one call.
//! - [`rank_against`] / [`closest`]: corpus comparison, optionally on the
//!   rayon pool.
//!
//! The text and image distances are defined differently on purpose. Image
//! scores were tuned against the coarser per-digit count; do not swap in a
//! bit-level distance without recalibrating.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{compare, score, Score};
//! use perceptual::{Fingerprint, FingerprintKind, TextFingerprint};
//!
//! let a = Fingerprint::Text(TextFingerprint::from_bits(0));
//! let b = Fingerprint::Text(TextFingerprint::from_bits(0xffff));
//!
//! let cmp = compare(&a, &b).unwrap();
//! assert_eq!(cmp.distance.value, 16);
//! assert_eq!(cmp.score.to_string(), "50.0");
//!
//! assert_eq!(score(40, FingerprintKind::Text, 64), Score::MAX);
//! assert_eq!(score(32, FingerprintKind::Image, 64).to_string(), "50.0");
//! ```

mod compare;
pub mod engine;
mod score;
pub mod types;

pub use crate::compare::{compare, distance, image_bit_distance, text_distance};
pub use crate::engine::{closest, rank_against};
pub use crate::score::score;
pub use crate::types::{
    Comparison, CorpusEntry, CorpusHit, Distance, MatchConfig, MatchError, Score, Shape,
};
