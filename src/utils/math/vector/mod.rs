pub mod math;
pub mod serde;

use std::fmt::Debug;

use num::Num;

use crate::error::{Result, VectorizeError};

/// SparseVec は 0 要素を省略した疎ベクトルです
/// column index と value を並列の Vec で持ちます
///
/// - indices は昇順で重複なし
/// - values に 0 は含まれない
/// - すべての index は `len` 未満
#[derive(Clone, PartialEq)]
pub struct SparseVec<N>
where
    N: Num,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> SparseVec<N>
where
    N: Num + Copy,
{
    /// 論理長 `len` のゼロベクトル
    #[inline]
    pub fn new(len: usize) -> Self {
        SparseVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, nnz: usize) -> Self {
        SparseVec {
            inds: Vec::with_capacity(nnz),
            vals: Vec::with_capacity(nnz),
            len,
        }
    }

    /// index/value の組から構築します
    /// 順序は問いません。重複した index は加算され、0 は落とされます。
    ///
    /// # Errors
    /// - `inds` と `vals` の長さが違えば `DimensionMismatch`
    /// - index が `len` 以上なら `IndexOutOfRange`
    pub fn from_parts(len: usize, inds: Vec<u32>, vals: Vec<N>) -> Result<Self> {
        if inds.len() != vals.len() {
            return Err(VectorizeError::DimensionMismatch {
                expected: inds.len(),
                actual: vals.len(),
            });
        }

        let mut pairs: Vec<(u32, N)> = inds.into_iter().zip(vals).collect();
        // stable, so duplicate indices are summed in input order
        pairs.sort_by_key(|&(ind, _)| ind);

        if let Some(&(last, _)) = pairs.last() {
            if last as usize >= len {
                return Err(VectorizeError::IndexOutOfRange { index: last as usize, len });
            }
        }

        let mut vec = SparseVec::with_capacity(len, pairs.len());
        for (ind, val) in pairs {
            match vec.inds.last() {
                Some(&prev) if prev == ind => {
                    if let Some(acc) = vec.vals.last_mut() {
                        *acc = *acc + val;
                    }
                }
                _ => {
                    vec.inds.push(ind);
                    vec.vals.push(val);
                }
            }
        }
        vec.drop_zeros();
        Ok(vec)
    }

    /// 密ベクトルから構築します
    pub fn from_dense(dense: &[N]) -> Self {
        let mut vec = SparseVec::new(dense.len());
        for (i, &val) in dense.iter().enumerate() {
            if val != N::zero() {
                vec.inds.push(i as u32);
                vec.vals.push(val);
            }
        }
        vec
    }

    /// 論理長 (vocabulary size)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 非ゼロ要素数
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// `index` の値。範囲外は `None`、省略された要素は 0
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// 非ゼロ要素を index 昇順で返します
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u32, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.inds
    }

    #[inline]
    pub fn values(&self) -> &[N] {
        &self.vals
    }

    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (ind, val) in self.iter() {
            dense[ind as usize] = val;
        }
        dense
    }

    /// 値を写像した新しいベクトル。0 になった要素は落とされます
    pub fn map_values<R, F>(&self, mut f: F) -> SparseVec<R>
    where
        R: Num + Copy,
        F: FnMut(u32, N) -> R,
    {
        let mut out = SparseVec::with_capacity(self.len, self.nnz());
        for (ind, val) in self.iter() {
            let mapped = f(ind, val);
            if mapped != R::zero() {
                out.inds.push(ind);
                out.vals.push(mapped);
            }
        }
        out
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [N] {
        &mut self.vals
    }

    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|v| *v != N::zero()) {
            return;
        }
        let mut write = 0;
        for read in 0..self.vals.len() {
            if self.vals[read] != N::zero() {
                self.inds[write] = self.inds[read];
                self.vals[write] = self.vals[read];
                write += 1;
            }
        }
        self.inds.truncate(write);
        self.vals.truncate(write);
    }
}

impl<N> Default for SparseVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        SparseVec::new(0)
    }
}

impl<N: Num + Copy + Debug> Debug for SparseVec<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.debug_list().entries(self.to_dense()).finish()
        } else {
            f.debug_struct("SparseVec")
                .field("len", &self.len)
                .field("entries", &self.iter().collect::<Vec<_>>())
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_sorts_merges_and_drops_zeros() {
        let vec = SparseVec::from_parts(6, vec![4, 1, 4, 2], vec![1u32, 3, 2, 0]).unwrap();
        assert_eq!(vec.indices(), &[1, 4]);
        assert_eq!(vec.values(), &[3, 3]);
        assert_eq!(vec.len(), 6);
        assert_eq!(vec.nnz(), 2);
    }

    #[test]
    fn from_parts_rejects_out_of_range_index() {
        let err = SparseVec::from_parts(3, vec![0, 3], vec![1u32, 1]).unwrap_err();
        assert!(matches!(err, VectorizeError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn from_parts_rejects_unpaired_values() {
        let err = SparseVec::<u32>::from_parts(5, vec![0, 1], vec![1]).unwrap_err();
        assert!(matches!(err, VectorizeError::DimensionMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn from_parts_handles_long_unsorted_input() {
        let inds: Vec<u32> = (0..100).rev().map(|i| i % 40).collect();
        let vals = vec![1u32; inds.len()];
        let vec = SparseVec::from_parts(40, inds, vals).unwrap();
        assert_eq!(vec.indices(), (0..40).collect::<Vec<u32>>().as_slice());
        assert_eq!(vec.values().iter().sum::<u32>(), 100);
        assert!(vec.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn get_distinguishes_implicit_zero_and_out_of_range() {
        let vec = SparseVec::from_dense(&[0.0, 2.5, 0.0]);
        assert_eq!(vec.get(1), Some(2.5));
        assert_eq!(vec.get(2), Some(0.0));
        assert_eq!(vec.get(3), None);
    }

    #[test]
    fn dense_conversion_keeps_layout() {
        let dense = vec![0u32, 1, 0, 0, 7];
        let vec = SparseVec::from_dense(&dense);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.to_dense(), dense);
    }

    #[test]
    fn empty_vector_has_no_entries() {
        let vec: SparseVec<f64> = SparseVec::new(0);
        assert!(vec.is_empty());
        assert_eq!(vec.iter().count(), 0);
        assert!(vec.to_dense().is_empty());
    }

    #[test]
    fn map_values_drops_new_zeros() {
        let vec = SparseVec::from_dense(&[1u32, 2, 3]);
        let mapped = vec.map_values(|_, v| if v == 2 { 0.0 } else { v as f64 * 0.5 });
        assert_eq!(mapped.indices(), &[0, 2]);
        assert_eq!(mapped.values(), &[0.5, 1.5]);
    }
}
