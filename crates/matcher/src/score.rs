//! Distance → originality score normalization.
//!
//! # Formulas
//!
//! ```text
//! image: score = round(distance / width * 1000) / 10
//! text:  score = round(min(2 * distance, width) / width * 1000) / 10
//! ```
//!
//! Two unrelated texts differ in about half of their 64 bits by chance, so
//! the text formula saturates at `distance = width / 2`. That spreads the
//! score range over the distances where related texts actually land.
//!
//! Rounding is half away from zero on tenths of a percent, computed in
//! integers: `tenths = (2 * n * 1000 + w) / (2 * w)`.

use perceptual::FingerprintKind;
use tracing::warn;

use crate::types::Score;

/// Map a raw distance to a score in [0.0, 100.0].
///
/// Total for `distance <= bit_width`. Out-of-contract inputs saturate: a
/// distance above the width is treated as the width, and a zero width
/// yields [`Score::ZERO`].
pub fn score(distance: u32, kind: FingerprintKind, bit_width: u32) -> Score {
    if bit_width == 0 {
        warn!(distance, kind = %kind, "score_zero_width");
        return Score::ZERO;
    }
    let distance = if distance > bit_width {
        warn!(distance, bit_width, kind = %kind, "score_distance_exceeds_width");
        bit_width
    } else {
        distance
    };

    let numerator = match kind {
        FingerprintKind::Image => distance,
        FingerprintKind::Text => distance.saturating_mul(2).min(bit_width),
    };
    Score::from_tenths(round_tenths(numerator, bit_width))
}

/// `round(numerator / width * 1000)`, half away from zero, for
/// `numerator <= width`.
fn round_tenths(numerator: u32, width: u32) -> u16 {
    let n = u64::from(numerator);
    let w = u64::from(width);
    let tenths = (2 * n * 1000 + w) / (2 * w);
    u16::try_from(tenths).unwrap_or(u16::MAX)
}
