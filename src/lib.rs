//! This crate turns an ordered text corpus into a deterministic vocabulary
//! and a sparse document-term matrix (raw counts or tf-idf weights).

pub mod config;
pub mod corpus;
pub mod error;
pub mod tokenize;
pub mod utils;
pub mod vectorizer;

/// Vectorizer
/// The top-level struct of this crate. It owns a tokenizer, a stop set and a
/// `VectorizerConfig`, and exposes `fit`, `transform_counts`,
/// `transform_tfidf` and their `fit_transform_*` combinations.
///
/// `Vectorizer<T, E>` has the following generic parameters:
/// - `T`: tokenizer strategy (any `Tokenizer`, closures included)
/// - `E`: tf-idf engine (`DefaultTfidfEngine` unless chosen with `with_engine`)
///
/// The stateless operations are also available as free functions:
/// `build_vocabulary`, `transform_counts`, `transform_tfidf` and
/// `transform_tfidf_with`.
pub use vectorizer::{
    build_vocabulary, transform_counts, transform_tfidf, transform_tfidf_with, Vectorized,
    Vectorizer,
};

/// Vocabulary
/// Maps each distinct non-stop-word token to a column index.
/// Indices follow the lexicographic order of the tokens, so the same input
/// always yields the same columns.
pub use vectorizer::vocabulary::Vocabulary;

/// Document-term matrix
/// One `SparseVec` row per document, in corpus order, each of length
/// `|Vocabulary|`. `u32` rows hold counts, `f64` rows hold tf-idf weights.
pub use vectorizer::matrix::DocumentTermMatrix;

/// Sparse vector
/// Sorted column index / value pairs plus the logical length. Absent
/// indices are zero.
pub use utils::math::SparseVec;

/// TF IDF Calculation Engine Trait
/// Plug a different tf or idf formula into `Vectorizer<T, E>`.
/// `DefaultTfidfEngine` computes `tf * (ln((n + s) / (df + s)) + offset)`.
pub use vectorizer::tfidf::{DefaultTfidfEngine, DocumentFrequency, TfidfEngine};

/// Token Frequency structure
/// Per-document token counts used to build each matrix row.
pub use vectorizer::token::TokenFrequency;

/// Corpus and Document
/// `Corpus` keeps documents in order and can be loaded from line-delimited
/// JSON records with a `"text"` field.
pub use corpus::{Corpus, Document};

/// Tokenizers and stop words
pub use tokenize::{StemmingTokenizer, StopSet, Tokenizer, WhitespaceTokenizer, WordTokenizer};

/// Configuration
pub use config::{Norm, TfidfConfig, VectorizerConfig};

/// Errors
pub use error::{Result, VectorizeError};
