use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::CanonicalizeConfig;
use crate::error::CanonicalError;
use crate::token::{Token, Tokenizer};

/// Default language-aware segmenter.
///
/// - Alphabetic scripts are split on Unicode word boundaries (UAX #29);
///   segments without any alphanumeric character (spaces, punctuation) are
///   dropped.
/// - Runs of CJK characters are emitted as overlapping character bigrams
///   (`"改变世界"` → `"改变"`, `"变世"`, `"世界"`). A run of a single character
///   is emitted as-is.
///
/// Offsets refer to the text after normalization and lowercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTokenizer {
    cfg: CanonicalizeConfig,
}

impl SegmentTokenizer {
    pub fn new(cfg: CanonicalizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &CanonicalizeConfig {
        &self.cfg
    }
}

impl Default for SegmentTokenizer {
    fn default() -> Self {
        Self {
            cfg: CanonicalizeConfig::default(),
        }
    }
}

impl Tokenizer for SegmentTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized: Cow<str> = if self.cfg.normalize_unicode {
            Cow::Owned(text.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };
        let prepared: Cow<str> = if self.cfg.lowercase {
            Cow::Owned(normalized.to_lowercase())
        } else {
            normalized
        };

        let mut tokens = Vec::with_capacity((prepared.len() / 4).saturating_add(1));
        let mut run: Vec<(usize, char)> = Vec::new();

        for (idx, segment) in prepared.split_word_bound_indices() {
            if segment.chars().all(is_cjk) {
                run.extend(segment.char_indices().map(|(ci, ch)| (idx + ci, ch)));
                continue;
            }
            flush_cjk_run(&mut run, self.cfg.cjk_bigrams, &mut tokens);
            if segment.chars().any(char::is_alphanumeric) {
                tokens.push(Token {
                    text: segment.to_string(),
                    start: idx,
                    end: idx + segment.len(),
                });
            }
        }
        flush_cjk_run(&mut run, self.cfg.cjk_bigrams, &mut tokens);

        tokens
    }
}

/// Emits the buffered CJK run as tokens and clears it.
fn flush_cjk_run(run: &mut Vec<(usize, char)>, bigrams: bool, tokens: &mut Vec<Token>) {
    match run.as_slice() {
        [] => {}
        [(start, ch)] => tokens.push(Token {
            text: ch.to_string(),
            start: *start,
            end: start + ch.len_utf8(),
        }),
        chars if bigrams => {
            for pair in chars.windows(2) {
                let (start, first) = pair[0];
                let (last_start, second) = pair[1];
                let mut text = String::with_capacity(first.len_utf8() + second.len_utf8());
                text.push(first);
                text.push(second);
                tokens.push(Token {
                    text,
                    start,
                    end: last_start + second.len_utf8(),
                });
            }
        }
        chars => {
            let (start, _) = chars[0];
            let (last_start, last) = chars[chars.len() - 1];
            tokens.push(Token {
                text: chars.iter().map(|(_, ch)| *ch).collect(),
                start,
                end: last_start + last.len_utf8(),
            });
        }
    }
    run.clear();
}

/// Whether `c` belongs to a script written without whitespace word breaks.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}' // CJK Unified Ideographs Extension A
        | '\u{3040}'..='\u{309F}' // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana
        | '\u{AC00}'..='\u{D7AF}' // Hangul Syllables
        | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: Vec<Token>) -> Vec<String> {
        tokens.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn latin_words_are_lowercased_and_punctuation_dropped() {
        let tokens = SegmentTokenizer::default().tokenize("Hello, World! It's Rust.");
        assert_eq!(texts(tokens), vec!["hello", "world", "it's", "rust"]);
    }

    #[test]
    fn cjk_run_becomes_bigrams() {
        let tokens = SegmentTokenizer::default().tokenize("改变世界");
        assert_eq!(texts(tokens), vec!["改变", "变世", "世界"]);
    }

    #[test]
    fn cjk_bigram_offsets_cover_both_chars() {
        let tokens = SegmentTokenizer::default().tokenize("ab 人工智能");
        let last = tokens.last().expect("tokens");
        assert_eq!(last.text, "智能");
        assert_eq!(last.end, "ab 人工智能".len());
        assert_eq!(last.start, "ab 人工".len());
    }

    #[test]
    fn punctuation_splits_cjk_runs() {
        let tokens = SegmentTokenizer::default().tokenize("人工，智能");
        assert_eq!(texts(tokens), vec!["人工", "智能"]);
    }

    #[test]
    fn single_cjk_char_run_is_kept_whole() {
        let tokens = SegmentTokenizer::default().tokenize("的 rust");
        assert_eq!(texts(tokens), vec!["的", "rust"]);
    }

    #[test]
    fn bigrams_disabled_emits_whole_run() {
        let cfg = CanonicalizeConfig::default().with_cjk_bigrams(false);
        let tokens = SegmentTokenizer::new(cfg).unwrap().tokenize("人工智能 rust");
        assert_eq!(texts(tokens), vec!["人工智能", "rust"]);
    }

    #[test]
    fn mixed_script_text() {
        let tokens = SegmentTokenizer::default().tokenize("UTF-8边界崩溃");
        assert_eq!(texts(tokens), vec!["utf", "8", "边界", "界崩", "崩溃"]);
    }

    #[test]
    fn nfkc_folds_full_width_latin() {
        let tokenizer = SegmentTokenizer::default();
        assert_eq!(
            texts(tokenizer.tokenize("ＲＵＳＴ")),
            texts(tokenizer.tokenize("rust"))
        );
    }

    #[test]
    fn normalization_can_be_disabled() {
        let cfg = CanonicalizeConfig::default()
            .with_normalize_unicode(false)
            .with_lowercase(false);
        let tokens = SegmentTokenizer::new(cfg).unwrap().tokenize("Rust");
        assert_eq!(texts(tokens), vec!["Rust"]);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            SegmentTokenizer::new(cfg),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_and_whitespace_input_yield_nothing() {
        let tokenizer = SegmentTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn is_cjk_ranges() {
        assert!(is_cjk('人'));
        assert!(is_cjk('カ'));
        assert!(is_cjk('한'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('，'));
    }
}
