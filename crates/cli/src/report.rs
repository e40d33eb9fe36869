use lexsem_api::Concept;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub(crate) struct InfoOutput {
    pub model: String,
    pub words: usize,
    pub dimension: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoredWord {
    pub word: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct NeighborsOutput {
    pub word: String,
    pub neighbors: Vec<ScoredWord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SimilarityOutput {
    pub word1: String,
    pub word2: String,
    pub score: f64,
    pub in_vocabulary: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RelationsOutput {
    pub word1: String,
    pub word2: String,
    pub threshold: f64,
    pub scores: BTreeMap<String, f64>,
    pub relations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConceptsOutput {
    pub word: String,
    pub concepts: Vec<Concept>,
}
