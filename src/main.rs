use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{bail, Context};
use argh::FromArgs;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use doc_term_vectorizer::{
    Corpus, DocumentTermMatrix, StemmingTokenizer, StopSet, Tokenizer, Vectorizer,
    VectorizerConfig, Vocabulary, WhitespaceTokenizer, WordTokenizer,
};

#[derive(FromArgs)]
/// Build a vocabulary and a document-term matrix from a JSONL corpus.
struct Args {
    /// stop-word list to start from: "english" or "none"
    #[argh(option, default = "String::from(\"english\")")]
    stop_words: String,

    /// extra stop word (repeatable)
    #[argh(option)]
    add_stop_word: Vec<String>,

    /// stop word to drop from the list (repeatable)
    #[argh(option)]
    remove_stop_word: Vec<String>,

    /// tokenizer: "word" or "whitespace"
    #[argh(option, default = "String::from(\"word\")")]
    tokenizer: String,

    /// stem tokens with the English Snowball stemmer
    #[argh(switch)]
    stem: bool,

    /// emit tf-idf weights instead of raw counts
    #[argh(switch)]
    tfidf: bool,

    /// tokenize and count documents in parallel
    #[argh(switch)]
    parallel: bool,

    /// print only the N terms with the largest column totals
    #[argh(option)]
    top: Option<usize>,

    /// JSON file holding a VectorizerConfig
    #[argh(option)]
    config: Option<String>,

    /// line-delimited JSON corpus, one {"text": ...} record per line
    #[argh(positional)]
    input: String,
}

/// runtime-selected tokenizer
struct CliTokenizer(Box<dyn Tokenizer>);

impl Tokenizer for CliTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.0.tokenize(text)
    }
}

#[derive(Serialize)]
struct MatrixOutput<'a, N> {
    feature_names: Vec<&'a str>,
    rows: Vec<Vec<(u32, N)>>,
}

#[derive(Serialize)]
struct TopOutput<'a> {
    top_terms: Vec<(&'a str, f64)>,
}

fn build_tokenizer(name: &str, stem: bool) -> anyhow::Result<CliTokenizer> {
    let tokenizer: Box<dyn Tokenizer> = match (name, stem) {
        ("word", false) => Box::new(WordTokenizer),
        ("word", true) => Box::new(StemmingTokenizer::english(WordTokenizer)),
        ("whitespace", false) => Box::new(WhitespaceTokenizer),
        ("whitespace", true) => Box::new(StemmingTokenizer::english(WhitespaceTokenizer)),
        (other, _) => bail!("unknown tokenizer {other:?}, expected \"word\" or \"whitespace\""),
    };
    Ok(CliTokenizer(tokenizer))
}

fn build_stop_set(args: &Args) -> anyhow::Result<StopSet> {
    let mut stop_set = match args.stop_words.as_str() {
        "english" => StopSet::english(),
        "none" => StopSet::empty(),
        other => bail!("unknown stop-word list {other:?}, expected \"english\" or \"none\""),
    };
    stop_set
        .extend(&args.add_stop_word)
        .remove(&args.remove_stop_word);
    Ok(stop_set)
}

fn load_config(args: &Args) -> anyhow::Result<VectorizerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {path}"))?
        }
        None => VectorizerConfig::default(),
    };
    if args.parallel {
        config.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

fn write_matrix<N, W>(
    out: W,
    vocabulary: &Vocabulary,
    matrix: &DocumentTermMatrix<N>,
    top: Option<usize>,
) -> anyhow::Result<()>
where
    N: num::Num + Copy + Into<f64> + Serialize,
    W: Write,
{
    match top {
        Some(k) => {
            let output = TopOutput {
                top_terms: matrix.top_terms(vocabulary, k),
            };
            serde_json::to_writer_pretty(out, &output)?;
        }
        None => {
            let output = MatrixOutput {
                feature_names: vocabulary.feature_names(),
                rows: matrix.rows().iter().map(|row| row.iter().collect()).collect(),
            };
            serde_json::to_writer(out, &output)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Args = argh::from_env();
    let config = load_config(&args)?;
    let stop_set = build_stop_set(&args)?;
    let tokenizer = build_tokenizer(&args.tokenizer, args.stem)?;

    let corpus = Corpus::load_jsonl_path(&args.input)
        .with_context(|| format!("loading corpus {}", args.input))?;
    info!(documents = corpus.len(), stop_words = stop_set.len(), "corpus loaded");

    let vectorizer = Vectorizer::new(tokenizer)
        .with_stop_set(stop_set)
        .with_config(config);

    let stdout = io::stdout();
    let out = stdout.lock();
    if args.tfidf {
        let result = vectorizer.fit_transform_tfidf(&corpus)?;
        info!(vocabulary = result.vocabulary.len(), "tf-idf matrix ready");
        write_matrix(out, &result.vocabulary, &result.matrix, args.top)?;
    } else {
        let result = vectorizer.fit_transform_counts(&corpus)?;
        info!(vocabulary = result.vocabulary.len(), "count matrix ready");
        write_matrix(out, &result.vocabulary, &result.matrix, args.top)?;
    }
    println!();
    Ok(())
}
