//! YAML configuration file support.
//!
//! Loads the engine configuration (segmenter, stop words, corpus ranking)
//! from a single YAML file so a service can build its
//! [`OriginalityEngine`](crate::OriginalityEngine) once at startup.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "submission-review"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: true
//!   cjk_bigrams: true
//!
//! stop_words:
//!   builtin: ["chinese", "english"]
//!   path: "/etc/originality/stopwords.txt"
//!
//! matcher:
//!   max_results: 10
//!   use_parallel: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use canonical::{CanonicalizeConfig, StopWordLanguage, StopWords};
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the originality engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct OriginalityConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Default segmenter settings.
    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    /// Where the stop-word set comes from.
    #[serde(default)]
    pub stop_words: StopWordsConfig,

    /// Corpus ranking settings.
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl OriginalityConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: OriginalityConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))?;
        self.stop_words.validate()?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;
        Ok(())
    }

    pub fn with_canonical(mut self, canonical: CanonicalizeConfig) -> Self {
        self.canonical = canonical;
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWordsConfig) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_matcher(mut self, matcher: MatchConfig) -> Self {
        self.matcher = matcher;
        self
    }
}

impl Default for OriginalityConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            stop_words: StopWordsConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

/// Stop-word sources. All configured sources are merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopWordsConfig {
    /// Bundled language lists to include.
    #[serde(default)]
    pub builtin: Vec<StopWordLanguage>,

    /// Line-delimited stop-word file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StopWordsConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "stop_words.path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Build the merged set. Reads `path` if configured.
    pub fn load(&self) -> Result<StopWords, canonical::CanonicalError> {
        let mut set = StopWords::empty();
        for language in &self.builtin {
            set = set.merged(&StopWords::builtin(*language));
        }
        if let Some(path) = &self.path {
            set = set.merged(&StopWords::from_file(path)?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
canonical:
  version: 1
  lowercase: false
  normalize_unicode: true
  cjk_bigrams: true
matcher:
  max_results: 3
"#;

        let config = OriginalityConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert!(!config.canonical.lowercase);
        assert_eq!(config.matcher.max_results, 3);
        assert!(!config.matcher.use_parallel);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
stop_words:
  builtin: ["english"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = OriginalityConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.stop_words.builtin, vec![StopWordLanguage::English]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = OriginalityConfig::from_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = OriginalityConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.stop_words.builtin.is_empty());
        assert!(config.stop_words.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_version() {
        let result = OriginalityConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_canonical_validation() {
        let yaml = r#"
version: "1.0"
canonical:
  version: 0
  normalize_unicode: true
  lowercase: true
  cjk_bigrams: true
"#;
        let result = OriginalityConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("version must be >= 1"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  max_results: 0
"#;
        let result = OriginalityConfig::from_yaml(yaml);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("max_results must be greater than zero"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = OriginalityConfig::from_yaml("version: [unclosed");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_stop_words_load_merges_sources() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "自定义").unwrap();
        let cfg = StopWordsConfig {
            builtin: vec![StopWordLanguage::English],
            path: Some(file.path().to_path_buf()),
        };
        let set = cfg.load().unwrap();
        assert!(set.contains("the"));
        assert!(set.contains("自定义"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = OriginalityConfig::default().with_matcher(MatchConfig::default().with_parallel(true));
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back = OriginalityConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config, back);
    }
}
