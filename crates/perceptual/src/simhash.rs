//! Term-frequency weighted SimHash over word tokens.
//!
//! Every retained word votes on each of the 64 fingerprint bits with weight
//! equal to its occurrence count: `+freq` where bit `i mod 32` of the word's
//! FNV-1a hash is set, `-freq` where it is clear. A fingerprint bit is set
//! only when its vote total is strictly positive.
//!
//! The word hash is 32 bits wide, so bits 32..63 always mirror bits 0..31.
//! That is part of the fingerprint format; do not widen the hash.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use canonical::{SegmentTokenizer, StopWords, Tokenizer};
use fxhash::FxHashMap;
use tracing::debug;

use crate::fingerprint::TextFingerprint;
use crate::hash::fnv1a_32;

const WIDTH: usize = TextFingerprint::BITS as usize;

/// Occurrence counts of the words that survive filtering.
///
/// Invariant: every key has more than one character after trimming and is
/// not a stop word; every count is >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl WordFrequencyTable {
    /// Count `tokens`, discarding single-character tokens and stop words.
    /// Tokens are trimmed first, so `" the"` and `"the"` are the same word.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], stop_words: &StopWords) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens {
            let word = token.as_ref().trim();
            if word.chars().count() > 1 && !stop_words.contains(word) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for `word`, or 0 when it was not retained.
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct retained words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total retained occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// Fold a frequency table into a fingerprint.
pub fn simhash(table: &WordFrequencyTable) -> TextFingerprint {
    let mut acc = [0i64; WIDTH];
    for (word, freq) in table.iter() {
        let hash = fnv1a_32(word);
        let weight = i64::from(freq);
        for (i, slot) in acc.iter_mut().enumerate() {
            if (hash >> (i % 32)) & 1 == 1 {
                *slot += weight;
            } else {
                *slot -= weight;
            }
        }
    }

    // Ties (slot == 0) resolve to 0.
    let mut bits = 0u64;
    for (i, slot) in acc.iter().enumerate() {
        if *slot > 0 {
            bits |= 1u64 << i;
        }
    }
    TextFingerprint::from_bits(bits)
}

/// Builds text fingerprints with a fixed tokenizer and stop-word set.
///
/// Both collaborators are captured at construction and shared read-only, so
/// a builder can be cloned cheaply and used from any number of threads.
#[derive(Clone)]
pub struct TextFingerprintBuilder {
    tokenizer: Arc<dyn Tokenizer>,
    stop_words: Arc<StopWords>,
}

impl TextFingerprintBuilder {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, stop_words: Arc<StopWords>) -> Self {
        Self {
            tokenizer,
            stop_words,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Fingerprint raw text. Never fails: text with no retained words yields
    /// [`TextFingerprint::ZERO`].
    pub fn build(&self, text: &str) -> TextFingerprint {
        let start = Instant::now();
        let tokens = self.tokenizer.tokenize(text);
        let table = WordFrequencyTable::from_tokens(&tokens, &self.stop_words);
        let fingerprint = simhash(&table);
        debug!(
            tokens = tokens.len(),
            distinct_words = table.len(),
            fingerprint = %fingerprint,
            elapsed_micros = start.elapsed().as_micros(),
            "text_fingerprint_built"
        );
        fingerprint
    }

    /// Fingerprint a token stream segmented elsewhere. The configured
    /// tokenizer is bypassed; stop words still apply.
    pub fn build_from_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> TextFingerprint {
        simhash(&WordFrequencyTable::from_tokens(tokens, &self.stop_words))
    }

    /// The frequency table `build` would hash, for diagnostics.
    pub fn word_frequencies(&self, text: &str) -> WordFrequencyTable {
        let tokens = self.tokenizer.tokenize(text);
        WordFrequencyTable::from_tokens(&tokens, &self.stop_words)
    }
}

impl Default for TextFingerprintBuilder {
    /// Default segmenter, no stop words.
    fn default() -> Self {
        Self::new(
            Arc::new(SegmentTokenizer::default()),
            Arc::new(StopWords::empty()),
        )
    }
}

impl fmt::Debug for TextFingerprintBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFingerprintBuilder")
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}
