mod word;


pub use word::WordTokenizer;

/// Core trait for measuring text in tokens
///
/// Implementations must be deterministic: the same input always yields the
/// same tokens, in the same order.
pub trait Tokenizer: Send + Sync {
    /// Split text into an ordered sequence of word tokens
    ///
    /// # Arguments
    /// * `text` - Raw text to tokenize
    ///
    /// # Returns
    /// Borrowed token slices in source order. Empty input yields no tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of tokens in `text`
    fn count(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }
}
