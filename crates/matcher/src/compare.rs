//! Raw distance between two fingerprints of the same kind and width.
//!
//! The two kinds use different distance definitions and this is intentional:
//!
//! - **text**: popcount of the XOR of the two 64-bit values, i.e. the true
//!   bit-level Hamming distance.
//! - **image**: number of string positions holding different hex digits.
//!   A digit that differs in 1, 2, 3 or 4 of its bits counts once, so this
//!   undercounts bit divergence. Characters are compared as given, so a
//!   case difference counts as a differing digit. Scores for images were
//!   calibrated against this definition; [`image_bit_distance`] exposes the
//!   bit-level value for diagnostics only.

use perceptual::{Fingerprint, ImageFingerprint, TextFingerprint};

use crate::score::score;
use crate::types::{Comparison, Distance, MatchError, Shape};

/// Distance between `a` and `b`.
///
/// Fails with [`MatchError::Incomparable`] if the kinds or widths differ.
pub fn distance(a: &Fingerprint, b: &Fingerprint) -> Result<Distance, MatchError> {
    let (left, right) = (Shape::of(a), Shape::of(b));
    if left != right {
        return Err(MatchError::Incomparable { left, right });
    }

    let value = match (a, b) {
        (Fingerprint::Text(x), Fingerprint::Text(y)) => text_distance(*x, *y),
        (Fingerprint::Image(x), Fingerprint::Image(y)) => image_char_distance(x, y),
        _ => return Err(MatchError::Incomparable { left, right }),
    };

    Ok(Distance {
        kind: left.kind,
        value,
        width: left.width,
    })
}

/// Distance and normalized score in one step.
pub fn compare(a: &Fingerprint, b: &Fingerprint) -> Result<Comparison, MatchError> {
    let distance = distance(a, b)?;
    Ok(Comparison {
        distance,
        score: score(distance.value, distance.kind, distance.width),
    })
}

/// Bit-level Hamming distance over 64 bits.
#[inline]
pub fn text_distance(a: TextFingerprint, b: TextFingerprint) -> u32 {
    (a.bits() ^ b.bits()).count_ones()
}

/// True bit-level Hamming distance between two image hashes of equal length
/// (4 bits per hex digit). Not used for scoring.
pub fn image_bit_distance(a: &ImageFingerprint, b: &ImageFingerprint) -> Result<u32, MatchError> {
    if a.width() != b.width() {
        return Err(MatchError::Incomparable {
            left: Shape::of(&Fingerprint::Image(a.clone())),
            right: Shape::of(&Fingerprint::Image(b.clone())),
        });
    }
    Ok(a.as_str()
        .chars()
        .zip(b.as_str().chars())
        .map(|(x, y)| match (x.to_digit(16), y.to_digit(16)) {
            (Some(x), Some(y)) => (x ^ y).count_ones(),
            _ => 0,
        })
        .sum())
}

fn image_char_distance(a: &ImageFingerprint, b: &ImageFingerprint) -> u32 {
    let differing = a
        .as_str()
        .chars()
        .zip(b.as_str().chars())
        .filter(|(x, y)| x != y)
        .count();
    u32::try_from(differing).unwrap_or(u32::MAX)
}
