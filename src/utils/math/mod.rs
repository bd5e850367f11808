pub mod vector;

pub use vector::SparseVec;
