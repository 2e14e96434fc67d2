use std::fmt;

use perceptual::{Fingerprint, FingerprintKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind and width of a fingerprint, used to explain comparison failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: FingerprintKind,
    pub width: u32,
}

impl Shape {
    pub fn of(fp: &Fingerprint) -> Self {
        Self {
            kind: fp.kind(),
            width: fp.width(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.width)
    }
}

/// Raw difference between two same-shape fingerprints.
///
/// For text this is the bit-level Hamming distance; for image it is the
/// number of differing hex digit positions. `value <= width` always holds
/// for distances produced by [`distance`](crate::distance).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Distance {
    pub kind: FingerprintKind,
    pub value: u32,
    pub width: u32,
}

impl Distance {
    /// Normalized score for this distance.
    pub fn score(&self) -> Score {
        crate::score::score(self.value, self.kind, self.width)
    }
}

/// Dissimilarity in [0.0, 100.0] with one decimal digit; higher means more
/// original.
///
/// Held as an integer count of tenths of a percent so the displayed digit
/// never depends on floating-point representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(u16);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(1000);

    /// `tenths` is clamped to 1000.
    pub fn from_tenths(tenths: u16) -> Self {
        Score(tenths.min(Self::MAX.0))
    }

    pub fn tenths(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl From<Score> for f64 {
    fn from(value: Score) -> Self {
        value.as_f64()
    }
}

impl TryFrom<f64> for Score {
    type Error = MatchError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !(0.0..=100.0).contains(&value) {
            return Err(MatchError::InvalidScore(value));
        }
        let tenths = (value * 10.0).round();
        Ok(Score(tenths as u16))
    }
}

/// Distance and score for one pair of fingerprints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comparison {
    pub distance: Distance,
    pub score: Score,
}

/// A previously seen fingerprint and the caller's identifier for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusEntry {
    pub id: String,
    pub fingerprint: Fingerprint,
}

impl CorpusEntry {
    pub fn new(id: impl Into<String>, fingerprint: impl Into<Fingerprint>) -> Self {
        Self {
            id: id.into(),
            fingerprint: fingerprint.into(),
        }
    }
}

/// One ranked comparison against a corpus entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusHit {
    pub id: String,
    pub distance: Distance,
    pub score: Score,
}

/// Configuration for corpus ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum number of hits to return.
    #[serde(default = "MatchConfig::default_max_results")]
    pub max_results: usize,
    /// Compare against the corpus on the rayon thread pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_max_results() -> usize {
        10
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_results == 0 {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: Self::default_max_results(),
            use_parallel: false,
        }
    }
}

/// Errors raised by comparison and ranking.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Kind or width mismatch. Always an integration error; never coerced
    /// into a distance.
    #[error("incomparable fingerprints: {left} vs {right}")]
    Incomparable { left: Shape, right: Shape },

    #[error("invalid match config: {0}")]
    InvalidConfig(String),

    #[error("score {0} outside [0.0, 100.0]")]
    InvalidScore(f64),
}
