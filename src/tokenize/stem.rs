use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

use super::Tokenizer;

/// Wraps a tokenizer and reduces every token to its Snowball stem
///
/// ```
/// use doc_term_vectorizer::tokenize::{StemmingTokenizer, Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = StemmingTokenizer::english(WhitespaceTokenizer);
/// assert_eq!(tokenizer.tokenize("Running dogs"), vec!["run", "dog"]);
/// ```
pub struct StemmingTokenizer<T> {
    inner: T,
    stemmer: Stemmer,
}

impl<T> StemmingTokenizer<T>
where
    T: Tokenizer,
{
    pub fn new(inner: T, algorithm: Algorithm) -> Self {
        Self {
            inner,
            stemmer: Stemmer::create(algorithm),
        }
    }

    pub fn english(inner: T) -> Self {
        Self::new(inner, Algorithm::English)
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T> Tokenizer for StemmingTokenizer<T>
where
    T: Tokenizer,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.inner
            .tokenize(text)
            .into_iter()
            .map(|token| self.stemmer.stem(&token).into_owned())
            .filter(|token| !token.is_empty())
            .collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for StemmingTokenizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmingTokenizer")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
