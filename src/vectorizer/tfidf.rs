use serde::{Deserialize, Serialize};

use crate::config::{Norm, TfidfConfig};
use crate::error::{Result, VectorizeError};
use crate::utils::math::SparseVec;
use crate::vectorizer::matrix::DocumentTermMatrix;

/// Document count plus, per column, the number of documents containing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFrequency {
    pub doc_num: u64,
    pub df: Vec<u64>,
}

impl DocumentFrequency {
    /// Reduce a finished count matrix into column document frequencies
    pub fn from_counts(counts: &DocumentTermMatrix<u32>) -> Self {
        let mut df = vec![0u64; counts.n_cols()];
        for row in counts.rows() {
            for (ind, _) in row.iter() {
                df[ind as usize] += 1;
            }
        }
        Self {
            doc_num: counts.n_rows() as u64,
            df,
        }
    }

    #[inline]
    pub fn get(&self, column: usize) -> u64 {
        self.df.get(column).copied().unwrap_or(0)
    }
}

/// TF-IDF 計算エンジン
/// このトレイトを実装して `Vectorizer<T, E>` に差し込めます
pub trait TfidfEngine {
    /// column ごとの IDF
    fn idf_vec(df: &DocumentFrequency, config: &TfidfConfig) -> Vec<f64>;
    /// raw count から TF
    fn tf(count: u32, config: &TfidfConfig) -> f64;
}

/// デフォルトの TF-IDF エンジン
///
/// - `tf = count` (`sublinear_tf` なら `1 + ln(count)`)
/// - `idf = ln((n + s) / (df + s)) + offset`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfidfEngine;

impl TfidfEngine for DefaultTfidfEngine {
    fn idf_vec(df: &DocumentFrequency, config: &TfidfConfig) -> Vec<f64> {
        let n = df.doc_num as f64;
        df.df
            .iter()
            .map(|&freq| {
                let denom = freq as f64 + config.smoothing;
                if denom == 0.0 {
                    // column never occurs and there is no smoothing
                    0.0
                } else {
                    ((n + config.smoothing) / denom).ln() + config.idf_offset
                }
            })
            .collect()
    }

    #[inline]
    fn tf(count: u32, config: &TfidfConfig) -> f64 {
        if count == 0 {
            0.0
        } else if config.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}

/// tf * idf を掛けて行ごとに正規化します
///
/// `idf` に無い column があれば `IndexOutOfRange`
pub(crate) fn weigh_row<E: TfidfEngine>(
    row: &SparseVec<u32>,
    idf: &[f64],
    config: &TfidfConfig,
) -> Result<SparseVec<f64>> {
    let mut inds = Vec::with_capacity(row.nnz());
    let mut vals = Vec::with_capacity(row.nnz());
    for (ind, count) in row.iter() {
        let weight = idf
            .get(ind as usize)
            .ok_or(VectorizeError::IndexOutOfRange {
                index: ind as usize,
                len: idf.len(),
            })?;
        inds.push(ind);
        vals.push(E::tf(count, config) * weight);
    }

    let mut weighted = SparseVec::from_parts(row.len(), inds, vals)?;
    match config.norm {
        Norm::L2 => weighted.l2_normalize(),
        Norm::L1 => weighted.l1_normalize(),
        Norm::None => {}
    }
    Ok(weighted)
}

/// count 行列全体に重みを付けます
///
/// engine の idf が column 数と合わなければ `DimensionMismatch`
pub(crate) fn weigh_counts<E: TfidfEngine>(
    counts: &DocumentTermMatrix<u32>,
    config: &TfidfConfig,
) -> Result<DocumentTermMatrix<f64>> {
    let df = {
        let _span = tracing::info_span!("vectorize_stage", stage = "document_frequency").entered();
        DocumentFrequency::from_counts(counts)
    };
    let idf = E::idf_vec(&df, config);
    if idf.len() != counts.n_cols() {
        return Err(VectorizeError::DimensionMismatch {
            expected: counts.n_cols(),
            actual: idf.len(),
        });
    }
    let rows = counts
        .rows()
        .iter()
        .map(|row| weigh_row::<E>(row, &idf, config))
        .collect::<Result<Vec<_>>>()?;
    DocumentTermMatrix::new(counts.n_cols(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(rows: &[&[u32]]) -> DocumentTermMatrix<u32> {
        let n_cols = rows[0].len();
        DocumentTermMatrix::new(n_cols, rows.iter().map(|r| SparseVec::from_dense(r)).collect())
            .unwrap()
    }

    #[test]
    fn document_frequency_counts_rows_not_occurrences() {
        let m = counts(&[&[2, 0, 1], &[5, 0, 0], &[0, 0, 3]]);
        let df = DocumentFrequency::from_counts(&m);
        assert_eq!(df.doc_num, 3);
        assert_eq!(df.df, vec![2, 0, 2]);
        assert_eq!(df.get(9), 0);
    }

    #[test]
    fn default_idf_is_smoothed() {
        let df = DocumentFrequency { doc_num: 4, df: vec![4, 1] };
        let idf = DefaultTfidfEngine::idf_vec(&df, &TfidfConfig::default());
        assert!((idf[0] - 1.0).abs() < 1e-12);
        assert!((idf[1] - ((5.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn unsmoothed_idf_of_unseen_column_is_zero() {
        let df = DocumentFrequency { doc_num: 2, df: vec![0, 1] };
        let cfg = TfidfConfig::default().with_smoothing(0.0);
        let idf = DefaultTfidfEngine::idf_vec(&df, &cfg);
        assert_eq!(idf[0], 0.0);
        assert!((idf[1] - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn sublinear_tf() {
        let cfg = TfidfConfig::default().with_sublinear_tf(true);
        assert_eq!(DefaultTfidfEngine::tf(0, &cfg), 0.0);
        assert_eq!(DefaultTfidfEngine::tf(1, &cfg), 1.0);
        assert!((DefaultTfidfEngine::tf(3, &cfg) - (1.0 + 3.0f64.ln())).abs() < 1e-12);
        assert_eq!(DefaultTfidfEngine::tf(3, &TfidfConfig::default()), 3.0);
    }

    #[test]
    fn unnormalized_weights_are_tf_times_idf() {
        let m = counts(&[&[2, 1], &[0, 1]]);
        let cfg = TfidfConfig::default().with_norm(Norm::None);
        let w = weigh_counts::<DefaultTfidfEngine>(&m, &cfg).unwrap();

        let idf0 = (3.0f64 / 2.0).ln() + 1.0;
        assert!((w.get(0, 0).unwrap() - 2.0 * idf0).abs() < 1e-12);
        assert!((w.get(0, 1).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(w.get(1, 0), Some(0.0));
    }

    /// drops the last column from the default idf
    struct TruncatedIdf;

    impl TfidfEngine for TruncatedIdf {
        fn idf_vec(df: &DocumentFrequency, config: &TfidfConfig) -> Vec<f64> {
            let mut idf = DefaultTfidfEngine::idf_vec(df, config);
            idf.pop();
            idf
        }

        fn tf(count: u32, config: &TfidfConfig) -> f64 {
            DefaultTfidfEngine::tf(count, config)
        }
    }

    #[test]
    fn short_idf_from_engine_is_an_error() {
        let m = counts(&[&[1, 1, 1]]);
        let err = weigh_counts::<TruncatedIdf>(&m, &TfidfConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            VectorizeError::DimensionMismatch { expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn row_column_missing_from_idf_is_out_of_range() {
        let row = SparseVec::from_dense(&[0u32, 0, 4]);
        let err = weigh_row::<DefaultTfidfEngine>(&row, &[1.0, 1.0], &TfidfConfig::default())
            .unwrap_err();
        assert!(matches!(err, VectorizeError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn l1_rows_sum_to_one() {
        let m = counts(&[&[2, 1, 0], &[0, 1, 4]]);
        let cfg = TfidfConfig::default().with_norm(Norm::L1);
        let w = weigh_counts::<DefaultTfidfEngine>(&m, &cfg).unwrap();
        for row in w.rows() {
            assert!((row.l1_norm() - 1.0).abs() < 1e-12);
        }
    }
}
