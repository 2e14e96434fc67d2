use std::env;
use std::fs;

use canonical::{SegmentTokenizer, StopWordLanguage, StopWords, Tokenizer};

fn main() {
    let content = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path).expect("readable input file"),
        None => "UTF-8边界崩溃 and the ＡＢＣ test, 人工智能改变世界。".to_string(),
    };

    let tokenizer = SegmentTokenizer::default();
    let stop_words = StopWords::builtin(StopWordLanguage::English)
        .merged(&StopWords::builtin(StopWordLanguage::Chinese));

    let tokens = tokenizer.tokenize(&content);
    let kept: Vec<&str> = tokens
        .iter()
        .map(|t| t.text.as_str())
        .filter(|t| !stop_words.contains(t))
        .collect();

    println!("tokens: {:?}", tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>());
    println!();
    println!("kept after stop words: {kept:?}");
}
