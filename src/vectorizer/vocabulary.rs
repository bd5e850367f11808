use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorizeError};

/// Token → column index
///
/// Indices follow the byte-wise lexicographic order of the tokens, so two
/// vocabularies built from the same token set are identical regardless of
/// the order the tokens were seen in.
///
/// Serializes as the token list in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    columns: IndexMap<Box<str>, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any token collection; duplicates collapse
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<Box<str>> = tokens.into_iter().map(|t| t.as_ref().into()).collect();
        Self::from_sorted(sorted)
    }

    pub(crate) fn from_sorted(sorted: BTreeSet<Box<str>>) -> Result<Self> {
        if sorted.len() > u32::MAX as usize {
            return Err(VectorizeError::IndexOutOfRange {
                index: sorted.len() - 1,
                len: u32::MAX as usize,
            });
        }
        let columns = sorted
            .into_iter()
            .enumerate()
            .map(|(i, token)| (token, i as u32))
            .collect();
        Ok(Self { columns })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// column index of `token`
    #[inline]
    pub fn get(&self, token: &str) -> Option<u32> {
        self.columns.get(token).copied()
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.columns.contains_key(token)
    }

    /// token stored at column `index`
    #[inline]
    pub fn token(&self, index: u32) -> Option<&str> {
        self.columns
            .get_index(index as usize)
            .map(|(token, _)| token.as_ref())
    }

    /// (token, index) in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.columns.iter().map(|(token, &i)| (token.as_ref(), i))
    }

    /// tokens in column order
    pub fn feature_names(&self) -> Vec<&str> {
        self.columns.keys().map(AsRef::as_ref).collect()
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = String;

    fn try_from(tokens: Vec<String>) -> std::result::Result<Self, Self::Error> {
        if tokens.windows(2).any(|w| w[0] >= w[1]) {
            return Err("vocabulary tokens must be unique and sorted".to_string());
        }
        Vocabulary::from_tokens(tokens).map_err(|e| e.to_string())
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.columns.into_keys().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_sorted_order() {
        let vocab = Vocabulary::from_tokens(["love", "cake", "i", "cake", "hate"]).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.feature_names(), vec!["cake", "hate", "i", "love"]);
        assert_eq!(vocab.get("cake"), Some(0));
        assert_eq!(vocab.get("love"), Some(3));
        assert_eq!(vocab.get("chocolate"), None);
        assert_eq!(vocab.token(2), Some("i"));
        assert_eq!(vocab.token(4), None);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let a = Vocabulary::from_tokens(["b", "a", "c"]).unwrap();
        let b = Vocabulary::from_tokens(["c", "b", "a", "a"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let vocab = Vocabulary::from_tokens(["b", "B", "a"]).unwrap();
        assert_eq!(vocab.feature_names(), vec!["B", "a", "b"]);
    }

    #[test]
    fn serializes_as_token_list() {
        let vocab = Vocabulary::from_tokens(["y", "x"]).unwrap();
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
    }

    #[test]
    fn rejects_unsorted_token_list() {
        assert!(serde_json::from_str::<Vocabulary>(r#"["y","x"]"#).is_err());
        assert!(serde_json::from_str::<Vocabulary>(r#"["x","x"]"#).is_err());
    }
}
