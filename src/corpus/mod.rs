pub mod loader;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One unit of text, identified by its position in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Box<str>);

impl Document {
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Document(text.into())
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Document {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new(text)
    }
}

/// Ordered documents; the order is the row order of every matrix built from it
///
/// Derefs to `[Document]`, so it can be handed straight to the vectorizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Document>,
    {
        Self {
            documents: texts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, document: impl Into<Document>) {
        self.documents.push(document.into());
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl Deref for Corpus {
    type Target = [Document];

    fn deref(&self) -> &Self::Target {
        &self.documents
    }
}

impl<S: Into<Document>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Corpus::from_texts(iter)
    }
}
