//! Tokenizer and stop-word layer for originality fingerprinting.
//!
//! The text fingerprint is only as good as the word units it is built from.
//! This crate owns the two inputs the fingerprint builder consumes but does
//! not implement itself:
//!
//! - a [`Tokenizer`] that turns raw text into an ordered token stream, and
//! - an immutable [`StopWords`] set of words to exclude.
//!
//! ## What ships here
//!
//! - [`SegmentTokenizer`]: NFKC + lowercasing, Unicode word segmentation for
//!   alphabetic scripts, CJK runs as overlapping character bigrams.
//! - [`WhitespaceTokenizer`]: split on whitespace only, for text already
//!   segmented upstream (e.g. by a dictionary-based Chinese segmenter).
//! - [`StopWords`]: line-delimited lists, files, or bundled language lists.
//!
//! ## Pure function guarantee
//!
//! Tokenizers do no I/O and read no clocks, locales, or globals. Same text and
//! config, same tokens, on any machine. Only the stop-word file loader touches
//! the filesystem, and it runs once at startup.
//!
//! ```
//! use canonical::{SegmentTokenizer, StopWords, Tokenizer};
//!
//! let tokens = SegmentTokenizer::default().tokenize("Rust 改变世界");
//! let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, vec!["rust", "改变", "变世", "世界"]);
//!
//! let stop = StopWords::from_lines("the\nof\n");
//! assert!(stop.contains("the"));
//! ```

mod config;
mod error;
mod segment;
mod stopwords;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::segment::{is_cjk, SegmentTokenizer};
pub use crate::stopwords::{StopWordLanguage, StopWords};
pub use crate::token::{tokenize, Token, Tokenizer, WhitespaceTokenizer};
