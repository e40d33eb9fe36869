use crate::error::Result;
use crate::types::{Concept, ConceptRelation, Domain, WordRelation};
use std::collections::{HashMap, HashSet};

/// Abstract query interface over a lexical-semantic resource.
///
/// The interface is deliberately wide: it covers word-level queries (related
/// words, pairwise relations), the word/concept mapping, concept-level queries
/// and the language/domain inventory of the resource. A backend implements the
/// subset its underlying data can answer and returns
/// [`LexicalError::Unsupported`](crate::LexicalError::Unsupported) for the rest,
/// so callers can probe capabilities without special-casing backends.
///
/// `language` and `domain` act as optional filters; backends that cannot
/// discriminate by either ignore them.
pub trait LexicalResource {
    /// Words standing in `relation` to `word`.
    fn related_words(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
        relation: WordRelation,
    ) -> Result<HashSet<String>>;

    /// Like [`related_words`](Self::related_words), with a confidence score per word.
    fn related_words_weighted(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
        relation: WordRelation,
    ) -> Result<HashMap<String, f64>>;

    /// Relations that hold between `word1` and `word2`.
    fn word_relations(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word1: &str,
        word2: &str,
    ) -> Result<HashSet<WordRelation>>;

    /// Scored relation map between `word1` and `word2`.
    fn word_relations_weighted(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word1: &str,
        word2: &str,
    ) -> Result<HashMap<WordRelation, f64>>;

    /// Languages in which `word` exists.
    fn word_languages(&self, domain: Option<&Domain>, word: &str) -> Result<HashSet<String>>;

    /// Domains `word` belongs to.
    fn word_domains(&self, language: Option<&str>, word: &str) -> Result<HashSet<Domain>>;

    /// Membership score of `word` for each candidate domain.
    fn word_domains_weighted(
        &self,
        language: Option<&str>,
        word: &str,
        domains: &HashSet<Domain>,
    ) -> Result<HashMap<Domain, f64>>;

    /// Concepts that `word` can express.
    fn concepts(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
    ) -> Result<HashSet<Concept>>;

    /// Like [`concepts`](Self::concepts), with a confidence score per concept.
    fn concepts_weighted(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
    ) -> Result<HashMap<Concept, f64>>;

    /// Concepts of `word` that fall under `hypernym`.
    fn constrained_concepts(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
        hypernym: &Concept,
    ) -> Result<HashSet<Concept>>;

    /// Scored variant of [`constrained_concepts`](Self::constrained_concepts).
    fn constrained_concepts_weighted(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
        hypernym: &Concept,
    ) -> Result<HashMap<Concept, f64>>;

    /// Words expressing `concept` in `language`.
    fn concept_words(&self, language: Option<&str>, concept: &Concept) -> Result<HashSet<String>>;

    /// Scored variant of [`concept_words`](Self::concept_words).
    fn concept_words_weighted(
        &self,
        language: Option<&str>,
        concept: &Concept,
    ) -> Result<HashMap<String, f64>>;

    /// Human-readable definition of `concept`.
    fn gloss(&self, language: Option<&str>, concept: &Concept) -> Result<String>;

    /// Concepts standing in any of `relations` to `concept`.
    fn related_concepts(
        &self,
        concept: &Concept,
        relations: &HashSet<ConceptRelation>,
    ) -> Result<HashSet<Concept>>;

    /// Scored variant of [`related_concepts`](Self::related_concepts).
    fn related_concepts_weighted(
        &self,
        concept: &Concept,
        relations: &HashSet<ConceptRelation>,
    ) -> Result<HashMap<Concept, f64>>;

    /// Relations that hold between two concepts.
    fn concept_relations(&self, c1: &Concept, c2: &Concept) -> Result<HashSet<ConceptRelation>>;

    /// Scored relation map between two concepts.
    fn concept_relations_weighted(
        &self,
        c1: &Concept,
        c2: &Concept,
    ) -> Result<HashMap<ConceptRelation, f64>>;

    /// Languages in which `concept` is lexicalized.
    fn concept_languages(&self, concept: &Concept) -> Result<HashSet<String>>;

    /// Domains `concept` belongs to.
    fn concept_domains(&self, concept: &Concept) -> Result<HashSet<Domain>>;

    /// Scored variant of [`concept_domains`](Self::concept_domains).
    fn concept_domains_weighted(&self, concept: &Concept) -> Result<HashMap<Domain, f64>>;

    /// All languages covered by the resource.
    fn languages(&self) -> Result<HashSet<String>>;

    /// All domains covered by the resource.
    fn domains(&self) -> Result<HashSet<Domain>>;
}
