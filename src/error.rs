use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, VectorizeError>;

/// Errors surfaced by vectorization and corpus loading
#[derive(Error, Debug)]
pub enum VectorizeError {
    /// the corpus has no documents, so frequency math is undefined
    #[error("corpus contains no documents")]
    EmptyCorpus,

    /// the tokenizer returned something outside its contract
    #[error("invalid tokenizer output for document {document}: {reason}")]
    InvalidTokenizerOutput {
        document: usize,
        reason: String,
    },

    /// a column index does not fit the vocabulary
    /// this is always a defect, not a user error
    #[error("column index {index} out of range for vocabulary of size {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    /// a row length disagrees with the vocabulary size
    #[error("row length {actual} does not match vocabulary size {expected}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl VectorizeError {
    pub(crate) fn invalid_token(document: usize, reason: impl Into<String>) -> Self {
        VectorizeError::InvalidTokenizerOutput {
            document,
            reason: reason.into(),
        }
    }
}
