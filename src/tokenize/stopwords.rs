use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

/// Set of lowercase tokens excluded from the vocabulary
///
/// Mutable while a run is being set up, then borrowed immutably by each
/// vectorization call. Words are stored lowercased and matched exactly
/// against the tokens the tokenizer produces, so a tokenizer that keeps case
/// only has its lowercase tokens filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopSet {
    words: BTreeSet<String>,
}

impl StopSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// English list shipped by the `stop-words` crate
    pub fn english() -> Self {
        Self::new(get(LANGUAGE::English).iter().map(|s| s.to_string()))
    }

    pub fn extend<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
        self
    }

    pub fn remove<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
        self
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// stop words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased() {
        let set = StopSet::new(["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("The"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_is_case_insensitive_like_extend() {
        let mut set = StopSet::new(["But"]);
        set.remove(["BUT"]);
        assert!(set.is_empty());
    }

    #[test]
    fn extend_and_remove_adjust_the_set() {
        let mut set = StopSet::english();
        assert!(set.contains("the"));

        set.extend(["rt", "amp"]).remove(["not", "no"]);

        assert!(set.contains("rt"));
        assert!(set.contains("amp"));
        assert!(!set.contains("not"));
        assert!(!set.contains("no"));
    }

    #[test]
    fn empty_set_matches_nothing() {
        let set = StopSet::default();
        assert!(set.is_empty());
        assert!(!set.contains(""));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn iterates_sorted() {
        let set = StopSet::new(["c", "a", "b"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
