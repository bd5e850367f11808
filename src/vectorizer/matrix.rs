use std::cmp::Ordering;

use num::Num;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, VectorizeError};
use crate::utils::math::SparseVec;
use crate::vectorizer::vocabulary::Vocabulary;

/// One sparse row per document, in corpus order
///
/// Every row has logical length `n_cols` (the vocabulary size).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "N: Num + Copy + Serialize"))]
pub struct DocumentTermMatrix<N>
where
    N: Num + Copy,
{
    n_cols: usize,
    rows: Vec<SparseVec<N>>,
}

impl<'de, N> Deserialize<'de> for DocumentTermMatrix<N>
where
    N: Num + Copy + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawMatrix<N>
        where
            N: Num + Copy,
        {
            n_cols: usize,
            rows: Vec<SparseVec<N>>,
        }

        let raw = RawMatrix::<N>::deserialize(deserializer)?;
        DocumentTermMatrix::new(raw.n_cols, raw.rows).map_err(DeError::custom)
    }
}

impl<N> DocumentTermMatrix<N>
where
    N: Num + Copy,
{
    /// Every row must have length `n_cols`
    pub fn new(n_cols: usize, rows: Vec<SparseVec<N>>) -> Result<Self> {
        for row in &rows {
            if row.len() != n_cols {
                return Err(VectorizeError::DimensionMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { n_cols, rows })
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&SparseVec<N>> {
        self.rows.get(index)
    }

    #[inline]
    pub fn rows(&self) -> &[SparseVec<N>] {
        &self.rows
    }

    /// `None` when either coordinate is out of range
    pub fn get(&self, row: usize, col: usize) -> Option<N> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn to_dense(&self) -> Vec<Vec<N>> {
        self.rows.iter().map(SparseVec::to_dense).collect()
    }

    pub fn into_rows(self) -> Vec<SparseVec<N>> {
        self.rows
    }
}

impl<N> DocumentTermMatrix<N>
where
    N: Num + Copy + Into<f64>,
{
    /// Sum of every column over all documents
    pub fn column_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.n_cols];
        for row in &self.rows {
            for (ind, val) in row.iter() {
                totals[ind as usize] += val.into();
            }
        }
        totals
    }

    /// The `k` columns with the largest totals, highest first
    ///
    /// Ties keep column order. Columns with a zero total are left out.
    pub fn top_terms<'v>(&self, vocabulary: &'v Vocabulary, k: usize) -> Vec<(&'v str, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .column_totals()
            .into_iter()
            .enumerate()
            .filter(|&(_, total)| total > 0.0)
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
            .into_iter()
            .take(k)
            .filter_map(|(col, total)| vocabulary.token(col as u32).map(|t| (t, total)))
            .collect()
    }
}
