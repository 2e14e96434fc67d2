//! Stop-word set shared by every text fingerprint build.
//!
//! The set is built once (from a line-delimited list, a file, or one of the
//! bundled language lists) and is immutable afterwards. Share it behind an
//! `Arc` rather than rebuilding it per document.

use std::fs;
use std::path::Path;

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CanonicalError;

/// Bundled stop-word lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StopWordLanguage {
    English,
    Chinese,
}

impl StopWordLanguage {
    fn list(self) -> Vec<String> {
        match self {
            StopWordLanguage::English => stop_words::get(stop_words::LANGUAGE::English),
            StopWordLanguage::Chinese => stop_words::get(stop_words::LANGUAGE::Chinese),
        }
    }
}

/// Immutable set of words excluded from fingerprinting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// An empty set; every token passes the stop-word filter.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a line-delimited list. Each line is trimmed; blank lines are
    /// ignored.
    pub fn from_lines(list: &str) -> Self {
        Self::from_words(list.lines())
    }

    /// Load a line-delimited list from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CanonicalError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| CanonicalError::StopWordsRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        let set = Self::from_lines(&content);
        info!(path = %path.display(), words = set.len(), "stop_words_loaded");
        Ok(set)
    }

    /// The bundled list for `language`.
    pub fn builtin(language: StopWordLanguage) -> Self {
        let set = Self::from_words(language.list());
        info!(language = ?language, words = set.len(), "stop_words_loaded");
        set
    }

    /// Build from any iterator of words. Entries are trimmed; empty entries
    /// are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Union of this set and `other`.
    pub fn merged(mut self, other: &StopWords) -> Self {
        self.words.extend(other.words.iter().cloned());
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let trimmed = word.as_ref().trim();
            if !trimmed.is_empty() {
                self.words.insert(trimmed.to_string());
            }
        }
    }
}
