//! Tokenizer strategies.
//!
//! The vectorizer only relies on the [`Tokenizer`] contract: a pure,
//! deterministic function from a document to an ordered list of tokens.
//! Any `Fn(&str) -> Vec<String>` closure satisfies it.

pub mod stem;
pub mod stopwords;

pub use stem::StemmingTokenizer;
pub use stopwords::StopSet;

/// Document → ordered token sequence
///
/// Implementations must be deterministic and must not yield empty tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Lowercases and splits on whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}

/// Lowercases and splits on every non-alphanumeric character
///
/// Punctuation, `@`, `#` and friends act as separators, so `"don't"`
/// yields `["don", "t"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_lowercases_and_keeps_punctuation() {
        let tokens = WhitespaceTokenizer.tokenize("I love  Cake!\tnow");
        assert_eq!(tokens, vec!["i", "love", "cake!", "now"]);
    }

    #[test]
    fn word_tokenizer_splits_on_punctuation() {
        let tokens = WordTokenizer.tokenize("Hello, World! it's #rust2024");
        assert_eq!(tokens, vec!["hello", "world", "it", "s", "rust2024"]);
        assert!(WordTokenizer.tokenize("  ...  ").is_empty());
    }

    #[test]
    fn closures_are_tokenizers() {
        let upper = |text: &str| text.split(',').map(|s| s.trim().to_uppercase()).collect::<Vec<_>>();
        assert_eq!(upper.tokenize("a, b"), vec!["A", "B"]);
    }
}
