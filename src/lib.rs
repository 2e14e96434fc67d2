//! Workspace umbrella crate for content originality fingerprinting.
//!
//! This crate stitches together tokenization, fingerprinting and scoring so
//! callers (e.g. a submission-review workflow) can work through a single
//! entry point:
//!
//! - [`OriginalityEngine::build_text_fingerprint`]: text → 64-bit SimHash
//! - [`wrap_image_fingerprint`]: external perceptual hash → comparable value
//! - [`distance`]: same-kind fingerprints → raw distance
//! - [`score`]: distance → originality score in [0.0, 100.0]
//!
//! Scores measure *dissimilarity*: 0.0 means identical fingerprints, 100.0
//! means as different as the scheme can express. What score counts as
//! "too similar" is the caller's policy.
//!
//! ```
//! use originality::{OriginalityConfig, OriginalityEngine};
//!
//! let engine = OriginalityEngine::from_config(&OriginalityConfig::default()).unwrap();
//! let same = engine.compare_texts("人工智能改变世界", "人工智能改变世界");
//! assert_eq!(same.distance.value, 0);
//! assert_eq!(same.score.to_string(), "0.0");
//! ```

pub mod config;

pub use canonical::{
    CanonicalError, CanonicalizeConfig, SegmentTokenizer, StopWordLanguage, StopWords, Token,
    Tokenizer, WhitespaceTokenizer,
};
pub use matcher::{
    closest, compare, distance, image_bit_distance, rank_against, score, text_distance,
    Comparison, CorpusEntry, CorpusHit, Distance, MatchConfig, MatchError, Score, Shape,
};
pub use perceptual::{
    wrap_image_fingerprint, Fingerprint, FingerprintError, FingerprintKind, ImageFingerprint,
    MalformedReason, TextFingerprint, TextFingerprintBuilder, WordFrequencyTable,
    TEXT_FINGERPRINT_ALGORITHM, TEXT_FINGERPRINT_VERSION,
};

pub use crate::config::{ConfigLoadError, OriginalityConfig, StopWordsConfig};

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::info;

/// Errors surfaced by the engine, with the originating stage's kind intact.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Canonical(CanonicalError),
    Fingerprint(FingerprintError),
    Match(MatchError),
    InvalidConfig(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Canonical(err) => write!(f, "tokenizer setup failed: {err}"),
            PipelineError::Fingerprint(err) => write!(f, "fingerprinting failed: {err}"),
            PipelineError::Match(err) => write!(f, "comparison failed: {err}"),
            PipelineError::InvalidConfig(msg) => write!(f, "invalid engine config: {msg}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Canonical(err) => Some(err),
            PipelineError::Fingerprint(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::InvalidConfig(_) => None,
        }
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        PipelineError::Canonical(value)
    }
}

impl From<FingerprintError> for PipelineError {
    fn from(value: FingerprintError) -> Self {
        PipelineError::Fingerprint(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// Fingerprint builder plus ranking settings, built once per process.
///
/// Cheap to clone; every clone shares the same tokenizer and stop-word set.
#[derive(Debug, Clone)]
pub struct OriginalityEngine {
    builder: TextFingerprintBuilder,
    match_cfg: MatchConfig,
}

impl OriginalityEngine {
    pub fn new(builder: TextFingerprintBuilder, match_cfg: MatchConfig) -> Self {
        Self { builder, match_cfg }
    }

    /// Build the default segmenter and load stop words as configured.
    pub fn from_config(cfg: &OriginalityConfig) -> Result<Self, PipelineError> {
        cfg.validate()
            .map_err(|err| PipelineError::InvalidConfig(err.to_string()))?;

        let tokenizer = SegmentTokenizer::new(cfg.canonical.clone())?;
        let stop_words = cfg.stop_words.load()?;
        info!(
            config = cfg.name.as_deref().unwrap_or("unnamed"),
            stop_words = stop_words.len(),
            cjk_bigrams = cfg.canonical.cjk_bigrams,
            "originality_engine_ready"
        );

        let builder = TextFingerprintBuilder::new(Arc::new(tokenizer), Arc::new(stop_words));
        Ok(Self::new(builder, cfg.matcher.clone()))
    }

    pub fn builder(&self) -> &TextFingerprintBuilder {
        &self.builder
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.match_cfg
    }

    pub fn build_text_fingerprint(&self, text: &str) -> TextFingerprint {
        self.builder.build(text)
    }

    pub fn wrap_image_fingerprint(&self, raw_hash: &str) -> Result<ImageFingerprint, PipelineError> {
        Ok(wrap_image_fingerprint(raw_hash)?)
    }

    pub fn distance(&self, a: &Fingerprint, b: &Fingerprint) -> Result<Distance, PipelineError> {
        Ok(distance(a, b)?)
    }

    /// Fingerprint both texts and score them against each other.
    pub fn compare_texts(&self, a: &str, b: &str) -> Comparison {
        let value = text_distance(self.builder.build(a), self.builder.build(b));
        let distance = Distance {
            kind: FingerprintKind::Text,
            value,
            width: TextFingerprint::BITS,
        };
        Comparison {
            distance,
            score: distance.score(),
        }
    }

    /// Wrap both external hashes and score them against each other.
    pub fn compare_images(&self, a: &str, b: &str) -> Result<Comparison, PipelineError> {
        let a = Fingerprint::Image(wrap_image_fingerprint(a)?);
        let b = Fingerprint::Image(wrap_image_fingerprint(b)?);
        Ok(compare(&a, &b)?)
    }

    /// Fingerprint `text` and rank it against previously seen fingerprints.
    pub fn rank_text(
        &self,
        text: &str,
        corpus: &[CorpusEntry],
    ) -> Result<Vec<CorpusHit>, PipelineError> {
        let candidate = Fingerprint::Text(self.builder.build(text));
        Ok(rank_against(&candidate, corpus, &self.match_cfg)?)
    }
}

impl Default for OriginalityEngine {
    /// Default segmenter, no stop words, default ranking.
    fn default() -> Self {
        Self::new(TextFingerprintBuilder::default(), MatchConfig::default())
    }
}
