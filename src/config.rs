use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorizeError};

/// Row normalization applied after tf-idf weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// unit Euclidean norm
    #[default]
    L2,
    /// unit sum of absolute values
    L1,
    /// raw weights
    None,
}

/// Tf-idf weighting policy
///
/// `idf(t) = ln((n + smoothing) / (df(t) + smoothing)) + idf_offset`
///
/// The defaults (`smoothing = 1`, `idf_offset = 1`, L2 rows) give
/// `tf * (ln((1 + n) / (1 + df)) + 1)` followed by unit-length rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfidfConfig {
    /// added to both the document count and every document frequency
    pub smoothing: f64,
    /// added to the logarithm
    pub idf_offset: f64,
    /// use `1 + ln(tf)` instead of the raw count
    pub sublinear_tf: bool,
    pub norm: Norm,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            idf_offset: 1.0,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

impl TfidfConfig {
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_idf_offset(mut self, idf_offset: f64) -> Self {
        self.idf_offset = idf_offset;
        self
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Reject constants that would make the weights negative or undefined
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing < 0.0 {
            return Err(VectorizeError::InvalidConfig(format!(
                "smoothing must be a finite non-negative number, got {}",
                self.smoothing
            )));
        }
        if !self.idf_offset.is_finite() || self.idf_offset < 0.0 {
            return Err(VectorizeError::InvalidConfig(format!(
                "idf_offset must be a finite non-negative number, got {}",
                self.idf_offset
            )));
        }
        Ok(())
    }
}

/// Settings for a [`Vectorizer`](crate::Vectorizer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VectorizerConfig {
    /// tokenize and count documents on the rayon pool
    pub parallel: bool,
    pub tfidf: TfidfConfig,
}

impl VectorizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_tfidf(mut self, tfidf: TfidfConfig) -> Self {
        self.tfidf = tfidf;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.tfidf.validate()
    }
}
