use super::Tokenizer;
use regex::Regex;
use std::sync::LazyLock;

/// Runs of letters, digits and underscore. Everything else separates tokens.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid word regex"));

/// Word-level tokenizer
///
/// Punctuation is dropped, so contractions and hyphenated words split into
/// sub-tokens (`don't` -> `don`, `t`).
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WORD.find_iter(text).map(|m| m.as_str()).collect()
    }

    fn count(&self, text: &str) -> usize {
        WORD.find_iter(text).count()
    }
}
