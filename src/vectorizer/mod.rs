pub mod matrix;
mod pipeline;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::config::{TfidfConfig, VectorizerConfig};
use crate::error::Result;
use crate::tokenize::{StopSet, Tokenizer};
use crate::vectorizer::matrix::DocumentTermMatrix;
use crate::vectorizer::tfidf::{DefaultTfidfEngine, TfidfEngine};
use crate::vectorizer::vocabulary::Vocabulary;

/// Collect the distinct non-stop-word tokens of `corpus` into a vocabulary
///
/// # Errors
/// - `EmptyCorpus` when `corpus` has no documents
/// - `InvalidTokenizerOutput` when the tokenizer yields an empty token
pub fn build_vocabulary<S, T>(corpus: &[S], tokenizer: &T, stop_set: &StopSet) -> Result<Vocabulary>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
{
    pipeline::vocabulary_pass(corpus, tokenizer, stop_set, false)
}

/// Raw occurrence counts, one sparse row per document
pub fn transform_counts<S, T>(
    corpus: &[S],
    tokenizer: &T,
    stop_set: &StopSet,
    vocabulary: &Vocabulary,
) -> Result<DocumentTermMatrix<u32>>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
{
    pipeline::count_pass(corpus, tokenizer, stop_set, vocabulary, false)
}

/// Tf-idf weights with smoothed idf and unit L2 rows
pub fn transform_tfidf<S, T>(
    corpus: &[S],
    tokenizer: &T,
    stop_set: &StopSet,
    vocabulary: &Vocabulary,
) -> Result<DocumentTermMatrix<f64>>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
{
    transform_tfidf_with(corpus, tokenizer, stop_set, vocabulary, &TfidfConfig::default())
}

/// [`transform_tfidf`] under an explicit weighting policy
pub fn transform_tfidf_with<S, T>(
    corpus: &[S],
    tokenizer: &T,
    stop_set: &StopSet,
    vocabulary: &Vocabulary,
    config: &TfidfConfig,
) -> Result<DocumentTermMatrix<f64>>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
{
    pipeline::tfidf_pass::<S, T, DefaultTfidfEngine>(
        corpus, tokenizer, stop_set, vocabulary, config, false,
    )
}

/// Vocabulary together with the matrix built against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: num::Num + Copy + Serialize",
    deserialize = "N: num::Num + Copy + Deserialize<'de>"
))]
pub struct Vectorized<N>
where
    N: num::Num + Copy,
{
    pub vocabulary: Vocabulary,
    pub matrix: DocumentTermMatrix<N>,
}

/// Vectorizer
/// Owns the tokenizer, the stop set and the configuration for repeated runs.
///
/// `Vectorizer<T, E>`:
/// - `T`: tokenizer strategy
/// - `E`: tf-idf engine (defaults to `DefaultTfidfEngine`)
///
/// # Examples
/// ```
/// use doc_term_vectorizer::{StopSet, Vectorizer, WhitespaceTokenizer};
///
/// let docs = ["I love cake", "I hate chocolate"];
/// let vectorizer = Vectorizer::new(WhitespaceTokenizer).with_stop_set(StopSet::new(["i"]));
/// let out = vectorizer.fit_transform_counts(&docs).unwrap();
/// assert_eq!(out.vocabulary.feature_names(), vec!["cake", "chocolate", "hate", "love"]);
/// assert_eq!(out.matrix.to_dense()[0], vec![1, 0, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Vectorizer<T, E = DefaultTfidfEngine> {
    tokenizer: T,
    stop_set: StopSet,
    config: VectorizerConfig,
    _marker: PhantomData<E>,
}

impl<T> Vectorizer<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T) -> Self {
        Self::with_engine(tokenizer)
    }
}

impl<T, E> Vectorizer<T, E>
where
    T: Tokenizer,
    E: TfidfEngine,
{
    /// use a custom tf-idf engine, e.g. `Vectorizer::<_, MyEngine>::with_engine(tok)`
    pub fn with_engine(tokenizer: T) -> Self {
        Self {
            tokenizer,
            stop_set: StopSet::empty(),
            config: VectorizerConfig::default(),
            _marker: PhantomData,
        }
    }

    pub fn with_stop_set(mut self, stop_set: StopSet) -> Self {
        self.stop_set = stop_set;
        self
    }

    pub fn with_config(mut self, config: VectorizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn stop_set(&self) -> &StopSet {
        &self.stop_set
    }

    /// adjust stop words between runs
    pub fn stop_set_mut(&mut self) -> &mut StopSet {
        &mut self.stop_set
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn fit<S>(&self, corpus: &[S]) -> Result<Vocabulary>
    where
        S: AsRef<str> + Sync,
    {
        pipeline::vocabulary_pass(corpus, &self.tokenizer, &self.stop_set, self.config.parallel)
    }

    pub fn transform_counts<S>(
        &self,
        corpus: &[S],
        vocabulary: &Vocabulary,
    ) -> Result<DocumentTermMatrix<u32>>
    where
        S: AsRef<str> + Sync,
    {
        pipeline::count_pass(
            corpus,
            &self.tokenizer,
            &self.stop_set,
            vocabulary,
            self.config.parallel,
        )
    }

    pub fn transform_tfidf<S>(
        &self,
        corpus: &[S],
        vocabulary: &Vocabulary,
    ) -> Result<DocumentTermMatrix<f64>>
    where
        S: AsRef<str> + Sync,
    {
        pipeline::tfidf_pass::<S, T, E>(
            corpus,
            &self.tokenizer,
            &self.stop_set,
            vocabulary,
            &self.config.tfidf,
            self.config.parallel,
        )
    }

    pub fn fit_transform_counts<S>(&self, corpus: &[S]) -> Result<Vectorized<u32>>
    where
        S: AsRef<str> + Sync,
    {
        let vocabulary = self.fit(corpus)?;
        let matrix = self.transform_counts(corpus, &vocabulary)?;
        Ok(Vectorized { vocabulary, matrix })
    }

    pub fn fit_transform_tfidf<S>(&self, corpus: &[S]) -> Result<Vectorized<f64>>
    where
        S: AsRef<str> + Sync,
    {
        let vocabulary = self.fit(corpus)?;
        let matrix = self.transform_tfidf(corpus, &vocabulary)?;
        Ok(Vectorized { vocabulary, matrix })
    }
}
