use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, VectorizeError};

use super::{Corpus, Document};

/// one JSON line; fields other than `text` are ignored
#[derive(Deserialize)]
struct Record {
    text: String,
}

impl Corpus {
    /// Read line-delimited JSON records, one document per `"text"` field
    ///
    /// Blank lines are skipped. A line that is not an object with a string
    /// `text` field fails with the 1-based line number.
    pub fn load_jsonl<R: BufRead>(reader: R) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: Record = serde_json::from_str(&line)
                .map_err(|source| VectorizeError::Json { line: i + 1, source })?;
            corpus.push(Document::new(record.text));
        }
        debug!(documents = corpus.len(), "loaded jsonl corpus");
        Ok(corpus)
    }

    pub fn load_jsonl_path<P: AsRef<Path>>(path: P) -> Result<Corpus> {
        let file = File::open(path.as_ref())?;
        Self::load_jsonl(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_fields_in_order() {
        let input = concat!(
            r#"{"id": 1, "text": "I love cake", "user": "a"}"#, "\n",
            "\n",
            r#"{"text": "I hate chocolate"}"#, "\n",
        );
        let corpus = Corpus::load_jsonl(input.as_bytes()).unwrap();
        let texts: Vec<&str> = corpus.iter().map(Document::text).collect();
        assert_eq!(texts, vec!["I love cake", "I hate chocolate"]);
    }

    #[test]
    fn missing_text_reports_line() {
        let input = "{\"text\": \"ok\"}\n{\"body\": \"nope\"}\n";
        let err = Corpus::load_jsonl(input.as_bytes()).unwrap_err();
        assert!(matches!(err, VectorizeError::Json { line: 2, .. }));
    }

    #[test]
    fn non_json_line_is_rejected() {
        let err = Corpus::load_jsonl("not json\n".as_bytes()).unwrap_err();
        assert!(matches!(err, VectorizeError::Json { line: 1, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Corpus::load_jsonl_path("/definitely/not/here.jsonl").unwrap_err();
        assert!(matches!(err, VectorizeError::Io(_)));
    }
}
