use serde::{Deserialize, Serialize};

/// A token with its UTF-8 byte offsets in the text it was cut from.
///
/// Offsets are informational only; fingerprinting looks at `text` alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the segmented text.
    pub start: usize,
    /// Byte offset (exclusive) in the segmented text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits raw text into an ordered sequence of word-like tokens.
///
/// This is the seam where a language-aware segmenter plugs into the
/// fingerprint builder. Implementations must be deterministic: the same
/// input must always produce the same token sequence.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Tokenizer that splits on Unicode whitespace only.
///
/// Suitable for text that an upstream segmenter has already split into
/// space-separated words. Performs no normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text)
    }
}

/// Tokenizes text on Unicode whitespace and produces byte offsets.
///
/// Deterministic and cross-platform.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_tokenizer_offsets_stable_for_non_bmp() {
        let text = " a\u{10348}b  c ";
        let tokens = WhitespaceTokenizer.tokenize(text);

        let expected = vec![
            Token {
                text: "a\u{10348}b".to_string(),
                start: 1,
                end: 1 + "a\u{10348}b".len(),
            },
            Token {
                text: "c".to_string(),
                start: text.len() - 2,
                end: text.len() - 1,
            },
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn whitespace_tokenizer_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn tokenizer_is_object_safe() {
        let tokenizer: Box<dyn Tokenizer> = Box::new(WhitespaceTokenizer);
        let texts: Vec<String> = tokenizer
            .tokenize("hello rust")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["hello", "rust"]);
    }
}
