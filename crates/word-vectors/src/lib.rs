//! In-memory store for pre-trained word embeddings.
//!
//! Loads word2vec-style serializations (text and C binary formats) into a
//! row-normalized matrix and answers cosine-similarity and nearest-neighbor
//! queries over it with a brute-force scan. There is no training and no ANN
//! index here; the whole model lives in memory and queries are a lookup plus a
//! linear pass over the matrix.

mod error;
mod format;
mod model;

pub use error::{Result, VectorModelError};
pub use model::{cosine_similarity, Neighbor, VectorModel};
