use std::cmp::Ordering;

use num::Num;

use super::SparseVec;

impl<N> SparseVec<N>
where
    N: Num + Copy + Into<f64>,
{
    /// ドット積
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let (a_inds, a_vals) = (self.indices(), self.values());
        let (b_inds, b_vals) = (other.indices(), other.values());
        let mut result = 0.0;
        let mut i = 0;
        let mut j = 0;
        while i < a_inds.len() && j < b_inds.len() {
            match a_inds[i].cmp(&b_inds[j]) {
                Ordering::Equal => {
                    result += a_vals[i].into() * b_vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// Σ(a_i^2)
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.values()
            .iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum()
    }

    /// ||a|| = sqrt(Σ(a_i^2))
    #[inline]
    pub fn l2_norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Σ|a_i|
    #[inline]
    pub fn l1_norm(&self) -> f64 {
        self.values().iter().map(|&v| v.into().abs()).sum()
    }

    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// どちらかがゼロベクトルなら 0
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        let denom = self.l2_norm() * other.l2_norm();
        if denom == 0.0 {
            0.0
        } else {
            self.dot(other) / denom
        }
    }
}

impl SparseVec<f64> {
    /// 全要素を `divisor` で割ります。0 の場合は何もしません
    pub fn scale_down(&mut self, divisor: f64) {
        if divisor == 0.0 {
            return;
        }
        for v in self.values_mut() {
            *v /= divisor;
        }
    }

    /// L2 ノルムを 1 にします。ゼロベクトルはそのまま
    pub fn l2_normalize(&mut self) {
        let norm = self.l2_norm();
        self.scale_down(norm);
    }

    /// L1 ノルムを 1 にします。ゼロベクトルはそのまま
    pub fn l1_normalize(&mut self) {
        let norm = self.l1_norm();
        self.scale_down(norm);
    }
}
