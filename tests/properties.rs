use proptest::prelude::*;

use doc_term_vectorizer::{
    build_vocabulary, transform_counts, transform_tfidf, StopSet, Vectorizer, VectorizerConfig,
    WhitespaceTokenizer,
};

fn corpus() -> impl Strategy<Value = Vec<String>> {
    let word = prop::sample::select(vec![
        "cake", "pie", "tea", "the", "and", "love", "hate", "a", "i", "chocolate",
    ]);
    let doc = prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "));
    prop::collection::vec(doc, 1..20)
}

fn stop_set() -> StopSet {
    StopSet::new(["the", "and", "a"])
}

proptest! {
    #[test]
    fn vocabulary_has_no_stop_words_and_is_sorted(docs in corpus()) {
        let stop = stop_set();
        let vocab = build_vocabulary(&docs, &WhitespaceTokenizer, &stop).unwrap();
        let names = vocab.feature_names();
        for name in &names {
            prop_assert!(!stop.contains(name));
        }
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn repeated_runs_are_identical(docs in corpus()) {
        let stop = stop_set();
        let a = build_vocabulary(&docs, &WhitespaceTokenizer, &stop).unwrap();
        let b = build_vocabulary(&docs, &WhitespaceTokenizer, &stop).unwrap();
        prop_assert_eq!(&a, &b);

        let ca = transform_counts(&docs, &WhitespaceTokenizer, &stop, &a).unwrap();
        let cb = transform_counts(&docs, &WhitespaceTokenizer, &stop, &b).unwrap();
        prop_assert_eq!(ca, cb);
    }

    #[test]
    fn one_row_per_document_with_vocabulary_width(docs in corpus()) {
        let stop = stop_set();
        let vocab = build_vocabulary(&docs, &WhitespaceTokenizer, &stop).unwrap();
        let counts = transform_counts(&docs, &WhitespaceTokenizer, &stop, &vocab).unwrap();
        prop_assert_eq!(counts.n_rows(), docs.len());
        for row in counts.rows() {
            prop_assert_eq!(row.len(), vocab.len());
        }
    }

    #[test]
    fn counts_match_token_occurrences(docs in corpus()) {
        let stop = stop_set();
        let vocab = build_vocabulary(&docs, &WhitespaceTokenizer, &stop).unwrap();
        let counts = transform_counts(&docs, &WhitespaceTokenizer, &stop, &vocab).unwrap();
        for (doc, row) in docs.iter().zip(counts.rows()) {
            let kept = doc.split_whitespace().filter(|t| !stop.contains(t)).count() as u32;
            prop_assert_eq!(row.values().iter().sum::<u32>(), kept);
        }
    }

    #[test]
    fn tfidf_rows_are_unit_or_zero(docs in corpus()) {
        let stop = stop_set();
        let vocab = build_vocabulary(&docs, &WhitespaceTokenizer, &stop).unwrap();
        let tfidf = transform_tfidf(&docs, &WhitespaceTokenizer, &stop, &vocab).unwrap();
        for row in tfidf.rows() {
            prop_assert!(row.values().iter().all(|&v| v >= 0.0));
            if row.nnz() > 0 {
                prop_assert!((row.l2_norm() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn parallel_matches_sequential(docs in corpus()) {
        let seq = Vectorizer::new(WhitespaceTokenizer).with_stop_set(stop_set());
        let par = Vectorizer::new(WhitespaceTokenizer)
            .with_stop_set(stop_set())
            .with_config(VectorizerConfig::new().with_parallel(true));
        prop_assert_eq!(
            seq.fit_transform_tfidf(&docs).unwrap(),
            par.fit_transform_tfidf(&docs).unwrap()
        );
    }
}
