//! The tokenize → count → weigh passes shared by the free functions and
//! [`Vectorizer`](super::Vectorizer).

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::debug;

use crate::config::TfidfConfig;
use crate::error::{Result, VectorizeError};
use crate::tokenize::{StopSet, Tokenizer};
use crate::utils::math::SparseVec;
use crate::vectorizer::matrix::DocumentTermMatrix;
use crate::vectorizer::tfidf::{weigh_counts, TfidfEngine};
use crate::vectorizer::token::TokenFrequency;
use crate::vectorizer::vocabulary::Vocabulary;

/// Enter a tracing span named after the pipeline stage
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("vectorize_stage", stage = $name).entered();
    };
}

/// Run `f` over every document, keeping corpus order in the output
///
/// On failure the error of the lowest-indexed failing document is returned,
/// whichever path ran.
fn map_documents<S, T, F>(corpus: &[S], parallel: bool, f: F) -> Result<Vec<T>>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(usize, &str) -> Result<T> + Sync + Send,
{
    if parallel {
        let results: Vec<Result<T>> = corpus
            .par_iter()
            .enumerate()
            .map(|(i, doc)| f(i, doc.as_ref()))
            .collect();
        results.into_iter().collect()
    } else {
        corpus
            .iter()
            .enumerate()
            .map(|(i, doc)| f(i, doc.as_ref()))
            .collect()
    }
}

fn ensure_non_empty<S>(corpus: &[S]) -> Result<()> {
    if corpus.is_empty() {
        return Err(VectorizeError::EmptyCorpus);
    }
    Ok(())
}

/// Token counts of one document with stop words already removed
fn analyze_document<T>(
    document: usize,
    text: &str,
    tokenizer: &T,
    stop_set: &StopSet,
) -> Result<TokenFrequency>
where
    T: Tokenizer + ?Sized,
{
    let tokens = tokenizer.tokenize(text);
    if let Some(pos) = tokens.iter().position(String::is_empty) {
        return Err(VectorizeError::invalid_token(
            document,
            format!("empty token at position {pos}"),
        ));
    }

    let mut freq = TokenFrequency::new();
    freq.add_tokens(&tokens);
    if !stop_set.is_empty() {
        freq.remove_tokens_by_condition(|token, _| stop_set.contains(token));
    }
    Ok(freq)
}

pub(crate) fn vocabulary_pass<S, T>(
    corpus: &[S],
    tokenizer: &T,
    stop_set: &StopSet,
    parallel: bool,
) -> Result<Vocabulary>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
{
    ensure_non_empty(corpus)?;

    let per_doc = {
        trace_stage!("tokenize");
        map_documents(corpus, parallel, |i, text| {
            analyze_document(i, text, tokenizer, stop_set)
        })?
    };

    trace_stage!("vocabulary");
    let mut distinct: BTreeSet<Box<str>> = BTreeSet::new();
    for freq in &per_doc {
        for (token, _) in freq.iter() {
            if !distinct.contains(token) {
                distinct.insert(token.into());
            }
        }
    }
    let vocabulary = Vocabulary::from_sorted(distinct)?;
    debug!(
        documents = corpus.len(),
        vocabulary = vocabulary.len(),
        stop_words = stop_set.len(),
        "built vocabulary"
    );
    Ok(vocabulary)
}

pub(crate) fn count_pass<S, T>(
    corpus: &[S],
    tokenizer: &T,
    stop_set: &StopSet,
    vocabulary: &Vocabulary,
    parallel: bool,
) -> Result<DocumentTermMatrix<u32>>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
{
    ensure_non_empty(corpus)?;

    trace_stage!("count");
    let rows: Vec<SparseVec<u32>> = map_documents(corpus, parallel, |i, text| {
        analyze_document(i, text, tokenizer, stop_set)?.count_vector(vocabulary)
    })?;
    let nnz: usize = rows.iter().map(SparseVec::nnz).sum();
    debug!(rows = rows.len(), cols = vocabulary.len(), nnz, "counted documents");
    DocumentTermMatrix::new(vocabulary.len(), rows)
}

pub(crate) fn tfidf_pass<S, T, E>(
    corpus: &[S],
    tokenizer: &T,
    stop_set: &StopSet,
    vocabulary: &Vocabulary,
    config: &TfidfConfig,
    parallel: bool,
) -> Result<DocumentTermMatrix<f64>>
where
    S: AsRef<str> + Sync,
    T: Tokenizer + ?Sized,
    E: TfidfEngine,
{
    config.validate()?;
    let counts = count_pass(corpus, tokenizer, stop_set, vocabulary, parallel)?;

    // document frequencies need every row, so weighting starts only here
    trace_stage!("weight");
    let weighted = weigh_counts::<E>(&counts, config)?;
    debug!(rows = weighted.n_rows(), norm = ?config.norm, "weighted tf-idf");
    Ok(weighted)
}
