use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::math::SparseVec;
use crate::vectorizer::vocabulary::Vocabulary;

/// TokenFrequency 構造体
/// 1 ドキュメント内の token の出現回数を管理します
///
/// # Examples
/// ```
/// use doc_term_vectorizer::vectorizer::token::TokenFrequency;
///
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["cake", "love", "cake"]);
/// assert_eq!(freq.token_count("cake"), 2);
/// assert_eq!(freq.token_total_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<Box<str>, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// token を 1 つ追加する
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.into(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// 複数の token を追加する
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// ある token の出現回数 (無ければ 0)
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// ユニークな token 数
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    /// 全 token のカウントの合計
    #[inline]
    pub fn token_total_count(&self) -> u64 {
        self.total_token_count
    }

    /// (token, count) を初出順で返します
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(t, &c)| (t.as_ref(), c))
    }

    /// 条件を満たす token を削除し、削除したカウントの合計を返します
    pub fn remove_tokens_by_condition<F>(&mut self, condition: F) -> u64
    where
        F: Fn(&str, u32) -> bool,
    {
        let mut removed_total_count: u64 = 0;
        self.token_count.retain(|token, count| {
            if condition(token, *count) {
                removed_total_count += *count as u64;
                false
            } else {
                true
            }
        });
        self.total_token_count -= removed_total_count;
        removed_total_count
    }

    /// vocabulary の列に写したカウントベクトル
    /// vocabulary に無い token は無視されます
    pub fn count_vector(&self, vocabulary: &Vocabulary) -> Result<SparseVec<u32>> {
        let mut inds = Vec::with_capacity(self.token_num());
        let mut vals = Vec::with_capacity(self.token_num());
        for (token, count) in self.iter() {
            if let Some(ind) = vocabulary.get(token) {
                inds.push(ind);
                vals.push(count);
            }
        }
        SparseVec::from_parts(vocabulary.len(), inds, vals)
    }
}
