//! Configuration types for the default text segmenter.
//!
//! This module defines [`CanonicalizeConfig`], which controls how raw text is
//! normalized before it is split into tokens by [`SegmentTokenizer`](crate::SegmentTokenizer).
//!
//! # Versioning
//!
//! The `version` field is critical for maintaining determinism. Any change to
//! segmentation behavior (even bug fixes) must be accompanied by a version
//! bump, because the token stream feeds directly into the text fingerprint.
//! Fingerprints built under different segmenter versions are not comparable
//! in any meaningful way.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(config.lowercase);
//! assert!(config.cjk_bigrams);
//! ```
//!
//! ## Preserving Original Case
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default().with_lowercase(false);
//! assert!(!config.lowercase);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the default segmenter.
///
/// Cheap to clone and serializable so it can be embedded in the top-level
/// YAML configuration.
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true,
///   "lowercase": true,
///   "cjk_bigrams": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Semantic version of the segmentation configuration.
    ///
    /// Must be >= 1; version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before segmenting.
    ///
    /// NFKC folds full-width Latin letters and digits (common in CJK input
    /// methods) into their ASCII forms, so `"ＡＢＣ"` and `"ABC"` produce the
    /// same tokens.
    pub normalize_unicode: bool,

    /// If true, apply locale-free Unicode lowercasing.
    pub lowercase: bool,

    /// If true, runs of CJK characters are emitted as overlapping character
    /// bigrams. If false, each run is emitted as one token.
    ///
    /// Text written without whitespace word boundaries has no segmentation
    /// signal beyond the characters themselves; bigrams are the usual
    /// dictionary-free approximation of words there.
    pub cjk_bigrams: bool,
}

impl CanonicalizeConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC normalization.
    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable or disable CJK bigram emission.
    pub fn with_cjk_bigrams(mut self, cjk_bigrams: bool) -> Self {
        self.cjk_bigrams = cjk_bigrams;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            cjk_bigrams: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = CanonicalizeConfig::default();
        assert_eq!(cfg.version, 1);
        assert!(cfg.normalize_unicode);
        assert!(cfg.lowercase);
        assert!(cfg.cjk_bigrams);
    }

    #[test]
    fn config_builder_chain() {
        let cfg = CanonicalizeConfig::new()
            .with_normalize_unicode(false)
            .with_lowercase(false)
            .with_cjk_bigrams(false);

        assert!(!cfg.normalize_unicode);
        assert!(!cfg.lowercase);
        assert!(!cfg.cjk_bigrams);
        assert_eq!(cfg.version, 1);
    }

    #[test]
    fn config_validate_rejects_version_zero() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_serde_missing_fields_use_defaults() {
        let cfg: CanonicalizeConfig = serde_json::from_str(r#"{"lowercase": false}"#).unwrap();
        assert!(!cfg.lowercase);
        assert!(cfg.normalize_unicode);
        assert_eq!(cfg.version, 1);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = CanonicalizeConfig::new().with_cjk_bigrams(false);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CanonicalizeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
