use crate::error::{Result, VectorModelError};
use crate::format;
use ndarray::{Array2, ArrayView1};
use std::collections::HashMap;
use std::path::Path;

/// A nearest-neighbor hit: a vocabulary word and its cosine score.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub word: String,
    pub score: f32,
}

/// Pre-trained word embeddings loaded into memory.
///
/// Rows are L2-normalized at load time, so cosine similarity between two
/// in-vocabulary words reduces to a dot product. Search is a brute-force scan
/// over the matrix.
#[derive(Debug)]
pub struct VectorModel {
    words: Vec<String>,
    index: HashMap<String, usize>,
    matrix: Array2<f32>,
}

impl VectorModel {
    /// Loads a serialized model from disk.
    ///
    /// The format is sniffed from the content: files that are valid UTF-8 are
    /// parsed as the text format (with or without a `vocab dim` header),
    /// anything else as the word2vec C binary format. Duplicate words keep
    /// their first occurrence.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        // Raw little-endian f32 blocks are essentially never valid UTF-8.
        let entries = match std::str::from_utf8(&bytes) {
            Ok(text) => format::parse_text(text)?,
            Err(_) => format::parse_binary(&bytes)?,
        };

        let model = Self::from_entries(entries)?;
        log::info!(
            "Loaded vector model from {} ({} words, dimension {})",
            path.display(),
            model.len(),
            model.dimension()
        );
        Ok(model)
    }

    /// Builds a model from parsed `(word, vector)` rows.
    pub fn from_entries(entries: Vec<(String, Vec<f32>)>) -> Result<Self> {
        let Some(dimension) = entries.first().map(|(_, v)| v.len()) else {
            return Err(VectorModelError::Empty);
        };

        let mut words = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        let mut flat = Vec::with_capacity(entries.len() * dimension);

        for (word, mut vector) in entries {
            if vector.len() != dimension {
                return Err(VectorModelError::InvalidDimension {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
            if index.contains_key(&word) {
                log::debug!("Duplicate word '{word}' in model, keeping first occurrence");
                continue;
            }
            normalize(&mut vector);
            index.insert(word.clone(), words.len());
            words.push(word);
            flat.extend_from_slice(&vector);
        }

        let matrix = Array2::from_shape_vec((words.len(), dimension), flat)
            .map_err(|e| VectorModelError::Binary(format!("matrix shape error: {e}")))?;

        Ok(Self {
            words,
            index,
            matrix,
        })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.ncols()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The normalized embedding of `word`, if in vocabulary.
    #[must_use]
    pub fn vector(&self, word: &str) -> Option<ArrayView1<'_, f32>> {
        self.index.get(word).map(|&row| self.matrix.row(row))
    }

    /// Cosine similarity between two words, `None` if either is out of
    /// vocabulary. The value is raw (in [-1, 1]); callers decide how to
    /// normalize it.
    #[must_use]
    pub fn similarity(&self, word1: &str, word2: &str) -> Option<f32> {
        let a = self.vector(word1)?;
        let b = self.vector(word2)?;
        Some(a.dot(&b))
    }

    /// The `k` nearest vocabulary words to `word`, scores sorted descending,
    /// the query word itself excluded. Out-of-vocabulary words yield an empty
    /// result, matching the behavior of the embedding stores this wraps.
    #[must_use]
    pub fn nearest(&self, word: &str, k: usize) -> Vec<Neighbor> {
        let Some(&query_row) = self.index.get(word) else {
            log::debug!("Word '{word}' not in vocabulary, no neighbors");
            return Vec::new();
        };
        self.scan(self.matrix.row(query_row), k, Some(query_row))
    }

    /// The `k` nearest vocabulary words to an arbitrary query vector.
    pub fn nearest_to(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if query.len() != self.dimension() {
            return Err(VectorModelError::InvalidDimension {
                expected: self.dimension(),
                actual: query.len(),
            });
        }
        let mut normalized = query.to_vec();
        normalize(&mut normalized);
        let query = ArrayView1::from(normalized.as_slice());
        Ok(self.scan(query, k, None))
    }

    fn scan(&self, query: ArrayView1<'_, f32>, k: usize, exclude: Option<usize>) -> Vec<Neighbor> {
        let mut scores: Vec<(usize, f32)> = self
            .matrix
            .rows()
            .into_iter()
            .enumerate()
            .filter(|(row, _)| Some(*row) != exclude)
            .map(|(row, vector)| (row, query.dot(&vector)))
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores.truncate(k);

        scores
            .into_iter()
            .map(|(row, score)| Neighbor {
                word: self.words[row].clone(),
                score,
            })
            .collect()
    }
}

/// Cosine similarity between two raw (not necessarily normalized) vectors.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

fn normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}
