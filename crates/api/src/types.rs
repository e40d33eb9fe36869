use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordRelation {
    Synonymy,
    Antonymy,
    Hypernymy,
    Hyponymy,
    Relatedness,
    Similarity,
}

impl WordRelation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synonymy => "synonymy",
            Self::Antonymy => "antonymy",
            Self::Hypernymy => "hypernymy",
            Self::Hyponymy => "hyponymy",
            Self::Relatedness => "relatedness",
            Self::Similarity => "similarity",
        }
    }
}

impl fmt::Display for WordRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation between two concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptRelation {
    Hypernymy,
    Hyponymy,
    Relatedness,
    Similarity,
}

impl ConceptRelation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hypernymy => "hypernymy",
            Self::Hyponymy => "hyponymy",
            Self::Relatedness => "relatedness",
            Self::Similarity => "similarity",
        }
    }
}

impl fmt::Display for ConceptRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named knowledge domain (e.g. "medicine", "law").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(pub String);

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A unit of meaning, identified within the backing resource.
///
/// Resources with a real concept inventory (wordnets, ontologies) use their own
/// identifiers. Flat word-level resources expose degenerate concepts where the
/// identifier and the label are both the word itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub label: String,
}

impl Concept {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Degenerate concept for a bare word: id and label are the word.
    pub fn from_word(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            id: word.clone(),
            label: word,
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
