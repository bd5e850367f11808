use ::serde::de::Error as DeError;
use ::serde::ser::SerializeStruct;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};
use num::Num;

use super::SparseVec;

impl<N> Serialize for SparseVec<N>
where
    N: Num + Serialize + Copy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // len と (index, value) の組を index 昇順で出力する
        let mut state = serializer.serialize_struct("SparseVec", 2)?;
        state.serialize_field("len", &(self.len() as u64))?;
        let entries: Vec<(u32, N)> = self.iter().collect();
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

impl<'de, N> Deserialize<'de> for SparseVec<N>
where
    N: Num + Deserialize<'de> + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SparseVecData<N> {
            len: u64,
            entries: Vec<(u32, N)>,
        }

        let data = SparseVecData::<N>::deserialize(deserializer)?;
        let (inds, vals): (Vec<u32>, Vec<N>) = data.entries.into_iter().unzip();
        SparseVec::from_parts(data.len as usize, inds, vals).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_layout_is_len_and_entries() {
        let vec = SparseVec::from_dense(&[0u32, 2, 0, 1]);
        let json = serde_json::to_string(&vec).unwrap();
        assert_eq!(json, r#"{"len":4,"entries":[[1,2],[3,1]]}"#);

        let back: SparseVec<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec);
    }

    #[test]
    fn rejects_index_past_len() {
        let bad = r#"{"len":2,"entries":[[5,1.0]]}"#;
        assert!(serde_json::from_str::<SparseVec<f64>>(bad).is_err());
    }
}
