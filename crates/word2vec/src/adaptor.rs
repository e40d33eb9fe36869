use lexsem_api::{
    Concept, ConceptRelation, Domain, LexicalError, LexicalResource, Result, WordRelation,
};
use lexsem_vectors::VectorModel;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Similarity threshold above which two words count as related. Set
/// empirically on an ontology-matching experiment.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.66;

/// Number of nearest neighbors returned by related-word queries.
pub const DEFAULT_RELATED_WORD_LIMIT: usize = 10;

const BACKEND: &str = "word2vec";

/// [`LexicalResource`] backend over a flat word-embedding model.
#[derive(Debug)]
pub struct Word2VecAdaptor {
    model: VectorModel,
    threshold: f64,
    related_word_limit: usize,
}

impl Word2VecAdaptor {
    /// Loads a serialized word2vec model with the default threshold.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_threshold(path, DEFAULT_SIMILARITY_THRESHOLD)
    }

    /// Loads a serialized word2vec model with a caller-chosen threshold.
    pub fn open_with_threshold(path: impl AsRef<Path>, threshold: f64) -> Result<Self> {
        let path = path.as_ref();
        let model = VectorModel::load(path).map_err(|e| {
            LexicalError::Model(format!(
                "Could not load word2vec model {}: {e}",
                path.display()
            ))
        })?;
        log::debug!(
            "word2vec adaptor ready ({} words, threshold {threshold})",
            model.len()
        );
        Ok(Self::from_model(model, threshold))
    }

    /// Wraps an already-loaded model.
    pub fn from_model(model: VectorModel, threshold: f64) -> Self {
        Self {
            model,
            threshold,
            related_word_limit: DEFAULT_RELATED_WORD_LIMIT,
        }
    }

    /// Overrides how many neighbors related-word queries return.
    #[must_use]
    pub fn with_related_word_limit(mut self, limit: usize) -> Self {
        self.related_word_limit = limit;
        self
    }

    #[must_use]
    pub fn model(&self) -> &VectorModel {
        &self.model
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Cosine similarity normalized into [0, 1]. Out-of-vocabulary pairs
    /// score 0.
    fn normalized_similarity(&self, word1: &str, word2: &str) -> f64 {
        match self.model.similarity(word1, word2) {
            Some(sim) => f64::from(sim).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    fn unsupported(operation: &'static str, reason: &str) -> LexicalError {
        LexicalError::unsupported(BACKEND, operation, reason)
    }

    fn no_structure(operation: &'static str) -> LexicalError {
        Self::unsupported(
            operation,
            "a flat vector model carries no language, domain or concept structure",
        )
    }
}

impl LexicalResource for Word2VecAdaptor {
    fn related_words(
        &self,
        _language: Option<&str>,
        _domain: Option<&Domain>,
        word: &str,
        relation: WordRelation,
    ) -> Result<HashSet<String>> {
        match relation {
            WordRelation::Synonymy | WordRelation::Antonymy => Err(Self::unsupported(
                "related_words",
                format!(
                    "word vector models cannot distinguish {relation} from general relatedness"
                )
                .as_str(),
            )),
            WordRelation::Hypernymy | WordRelation::Hyponymy => Err(Self::unsupported(
                "related_words",
                format!("word vector models carry no taxonomy, cannot answer {relation}").as_str(),
            )),
            WordRelation::Relatedness | WordRelation::Similarity => Ok(self
                .model
                .nearest(word, self.related_word_limit)
                .into_iter()
                .map(|n| n.word)
                .collect()),
        }
    }

    fn related_words_weighted(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
        relation: WordRelation,
    ) -> Result<HashMap<String, f64>> {
        let related = self.related_words(language, domain, word, relation)?;
        Ok(related
            .into_iter()
            .map(|neighbor| {
                let score = self.normalized_similarity(word, &neighbor);
                (neighbor, score)
            })
            .collect())
    }

    fn word_relations(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word1: &str,
        word2: &str,
    ) -> Result<HashSet<WordRelation>> {
        let weighted = self.word_relations_weighted(language, domain, word1, word2)?;
        Ok(weighted
            .into_iter()
            .filter(|(_, score)| *score >= self.threshold)
            .map(|(relation, _)| relation)
            .collect())
    }

    fn word_relations_weighted(
        &self,
        _language: Option<&str>,
        _domain: Option<&Domain>,
        word1: &str,
        word2: &str,
    ) -> Result<HashMap<WordRelation, f64>> {
        // One score serves both: cosine distance cannot tell similarity
        // proper from looser relatedness.
        let score = self.normalized_similarity(word1, word2);
        Ok(HashMap::from([
            (WordRelation::Relatedness, score),
            (WordRelation::Similarity, score),
        ]))
    }

    fn word_languages(&self, _domain: Option<&Domain>, _word: &str) -> Result<HashSet<String>> {
        Err(Self::no_structure("word_languages"))
    }

    fn word_domains(&self, _language: Option<&str>, _word: &str) -> Result<HashSet<Domain>> {
        Err(Self::no_structure("word_domains"))
    }

    fn word_domains_weighted(
        &self,
        _language: Option<&str>,
        _word: &str,
        _domains: &HashSet<Domain>,
    ) -> Result<HashMap<Domain, f64>> {
        Err(Self::no_structure("word_domains_weighted"))
    }

    fn concepts(
        &self,
        _language: Option<&str>,
        _domain: Option<&Domain>,
        word: &str,
    ) -> Result<HashSet<Concept>> {
        // The model has no sense inventory: each known word maps to exactly
        // one degenerate concept.
        let mut concepts = HashSet::new();
        if self.model.contains(word) {
            concepts.insert(Concept::from_word(word));
        }
        Ok(concepts)
    }

    fn concepts_weighted(
        &self,
        language: Option<&str>,
        domain: Option<&Domain>,
        word: &str,
    ) -> Result<HashMap<Concept, f64>> {
        let concepts = self.concepts(language, domain, word)?;
        Ok(concepts.into_iter().map(|c| (c, 1.0)).collect())
    }

    fn constrained_concepts(
        &self,
        _language: Option<&str>,
        _domain: Option<&Domain>,
        _word: &str,
        _hypernym: &Concept,
    ) -> Result<HashSet<Concept>> {
        Err(Self::no_structure("constrained_concepts"))
    }

    fn constrained_concepts_weighted(
        &self,
        _language: Option<&str>,
        _domain: Option<&Domain>,
        _word: &str,
        _hypernym: &Concept,
    ) -> Result<HashMap<Concept, f64>> {
        Err(Self::no_structure("constrained_concepts_weighted"))
    }

    fn concept_words(&self, _language: Option<&str>, concept: &Concept) -> Result<HashSet<String>> {
        Ok(HashSet::from([concept.id.clone()]))
    }

    fn concept_words_weighted(
        &self,
        _language: Option<&str>,
        concept: &Concept,
    ) -> Result<HashMap<String, f64>> {
        Ok(HashMap::from([(concept.id.clone(), 1.0)]))
    }

    fn gloss(&self, _language: Option<&str>, _concept: &Concept) -> Result<String> {
        Err(Self::unsupported(
            "gloss",
            "word vector models carry no definitions",
        ))
    }

    fn related_concepts(
        &self,
        concept: &Concept,
        _relations: &HashSet<ConceptRelation>,
    ) -> Result<HashSet<Concept>> {
        // Neighbors in vector space are undifferentiated; the requested
        // relation set cannot narrow them down.
        let related =
            self.related_words(None, None, &concept.id, WordRelation::Relatedness)?;
        Ok(related.into_iter().map(Concept::from_word).collect())
    }

    fn related_concepts_weighted(
        &self,
        concept: &Concept,
        _relations: &HashSet<ConceptRelation>,
    ) -> Result<HashMap<Concept, f64>> {
        let related =
            self.related_words_weighted(None, None, &concept.id, WordRelation::Relatedness)?;
        Ok(related
            .into_iter()
            .map(|(word, score)| (Concept::from_word(word), score))
            .collect())
    }

    fn concept_relations(&self, c1: &Concept, c2: &Concept) -> Result<HashSet<ConceptRelation>> {
        let weighted = self.concept_relations_weighted(c1, c2)?;
        Ok(weighted
            .into_iter()
            .filter(|(_, score)| *score >= self.threshold)
            .map(|(relation, _)| relation)
            .collect())
    }

    fn concept_relations_weighted(
        &self,
        c1: &Concept,
        c2: &Concept,
    ) -> Result<HashMap<ConceptRelation, f64>> {
        let score = self.normalized_similarity(&c1.id, &c2.id);
        Ok(HashMap::from([
            (ConceptRelation::Relatedness, score),
            (ConceptRelation::Similarity, score),
        ]))
    }

    fn concept_languages(&self, _concept: &Concept) -> Result<HashSet<String>> {
        Err(Self::no_structure("concept_languages"))
    }

    fn concept_domains(&self, _concept: &Concept) -> Result<HashSet<Domain>> {
        Err(Self::no_structure("concept_domains"))
    }

    fn concept_domains_weighted(&self, _concept: &Concept) -> Result<HashMap<Domain, f64>> {
        Err(Self::no_structure("concept_domains_weighted"))
    }

    fn languages(&self) -> Result<HashSet<String>> {
        Err(Self::no_structure("languages"))
    }

    fn domains(&self) -> Result<HashSet<Domain>> {
        Err(Self::no_structure("domains"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture_model() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "king 1.0 0.0 0.0\n\
             queen 0.9 0.1 0.0\n\
             prince 0.8 0.2 0.0\n\
             apple 0.0 1.0 0.0\n\
             orange -0.1 0.9 0.0\n\
             anti -1.0 0.0 0.0\n"
        )
        .unwrap();
        file
    }

    fn adaptor() -> Word2VecAdaptor {
        Word2VecAdaptor::open(fixture_model().path()).unwrap()
    }

    #[test]
    fn open_reports_missing_files() {
        let err = Word2VecAdaptor::open("/nonexistent/model.bin").unwrap_err();
        assert!(matches!(err, LexicalError::Model(_)));
        assert!(err.to_string().contains("Could not load word2vec model"));
    }

    #[test]
    fn synonymy_and_antonymy_are_unsupported() {
        let adaptor = adaptor();
        for relation in [WordRelation::Synonymy, WordRelation::Antonymy] {
            let err = adaptor
                .related_words(None, None, "king", relation)
                .unwrap_err();
            assert!(err.is_unsupported(), "{relation} should be unsupported");
        }
    }

    #[test]
    fn taxonomic_relations_are_unsupported() {
        let adaptor = adaptor();
        for relation in [WordRelation::Hypernymy, WordRelation::Hyponymy] {
            let err = adaptor
                .related_words(None, None, "king", relation)
                .unwrap_err();
            assert!(err.is_unsupported());
        }
    }

    #[test]
    fn related_words_returns_nearest_neighbors() {
        let adaptor = adaptor().with_related_word_limit(2);
        let related = adaptor
            .related_words(None, None, "king", WordRelation::Relatedness)
            .unwrap();
        assert_eq!(related.len(), 2);
        assert!(related.contains("queen"));
        assert!(related.contains("prince"));
        assert!(!related.contains("king"));
    }

    #[test]
    fn related_words_for_unknown_word_is_empty() {
        let adaptor = adaptor();
        let related = adaptor
            .related_words(None, None, "zeppelin", WordRelation::Relatedness)
            .unwrap();
        assert!(related.is_empty());
    }

    #[test]
    fn related_words_weighted_scores_are_normalized() {
        let adaptor = adaptor();
        let weighted = adaptor
            .related_words_weighted(None, None, "king", WordRelation::Similarity)
            .unwrap();
        assert!(!weighted.is_empty());
        for (word, score) in &weighted {
            assert!(
                (0.0..=1.0).contains(score),
                "score for '{word}' out of range: {score}"
            );
        }
        // "anti" points the opposite way; if retrieved, its raw cosine is
        // negative and must clamp to zero.
        if let Some(score) = weighted.get("anti") {
            assert_eq!(*score, 0.0);
        }
    }

    #[test]
    fn word_relations_weighted_scores_both_relations_equally() {
        let adaptor = adaptor();
        let weighted = adaptor
            .word_relations_weighted(None, None, "king", "queen")
            .unwrap();
        assert_eq!(weighted.len(), 2);
        let relatedness = weighted[&WordRelation::Relatedness];
        let similarity = weighted[&WordRelation::Similarity];
        assert_eq!(relatedness, similarity);
        assert!(relatedness > 0.9);
    }

    #[test]
    fn word_relations_applies_threshold() {
        let adaptor = adaptor();

        let close = adaptor
            .word_relations(None, None, "king", "queen")
            .unwrap();
        assert!(close.contains(&WordRelation::Relatedness));
        assert!(close.contains(&WordRelation::Similarity));

        let far = adaptor.word_relations(None, None, "king", "apple").unwrap();
        assert!(far.is_empty());
    }

    #[test]
    fn custom_threshold_changes_classification() {
        let strict =
            Word2VecAdaptor::open_with_threshold(fixture_model().path(), 0.999).unwrap();
        let relations = strict
            .word_relations(None, None, "king", "queen")
            .unwrap();
        assert!(relations.is_empty());

        let lax = Word2VecAdaptor::open_with_threshold(fixture_model().path(), 0.0).unwrap();
        let relations = lax.word_relations(None, None, "king", "apple").unwrap();
        assert_eq!(relations.len(), 2);
    }

    #[test]
    fn unknown_word_pairs_score_zero() {
        let adaptor = adaptor();
        let weighted = adaptor
            .word_relations_weighted(None, None, "king", "zeppelin")
            .unwrap();
        assert_eq!(weighted[&WordRelation::Relatedness], 0.0);
        assert_eq!(weighted[&WordRelation::Similarity], 0.0);
    }

    #[test]
    fn opposite_vectors_clamp_to_zero() {
        let adaptor = adaptor();
        let weighted = adaptor
            .word_relations_weighted(None, None, "king", "anti")
            .unwrap();
        assert_eq!(weighted[&WordRelation::Similarity], 0.0);
    }

    #[test]
    fn concepts_are_degenerate_per_word() {
        let adaptor = adaptor();

        let concepts = adaptor.concepts(None, None, "king").unwrap();
        assert_eq!(concepts.len(), 1);
        assert!(concepts.contains(&Concept::from_word("king")));

        let missing = adaptor.concepts(None, None, "zeppelin").unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn concepts_weighted_assigns_full_confidence() {
        let adaptor = adaptor();
        let weighted = adaptor.concepts_weighted(None, None, "king").unwrap();
        assert_eq!(weighted.len(), 1);
        assert_eq!(weighted[&Concept::from_word("king")], 1.0);

        let missing = adaptor.concepts_weighted(None, None, "zeppelin").unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn concept_words_echo_the_concept_id() {
        let adaptor = adaptor();
        let concept = Concept::from_word("queen");

        let words = adaptor.concept_words(None, &concept).unwrap();
        assert_eq!(words, HashSet::from(["queen".to_string()]));

        let weighted = adaptor.concept_words_weighted(None, &concept).unwrap();
        assert_eq!(weighted[&"queen".to_string()], 1.0);
    }

    #[test]
    fn related_concepts_lift_neighbor_words() {
        let adaptor = adaptor().with_related_word_limit(2);
        let concept = Concept::from_word("king");
        let relations = HashSet::from([ConceptRelation::Relatedness]);

        let related = adaptor.related_concepts(&concept, &relations).unwrap();
        assert_eq!(related.len(), 2);
        assert!(related.contains(&Concept::from_word("queen")));

        let weighted = adaptor
            .related_concepts_weighted(&concept, &relations)
            .unwrap();
        assert_eq!(weighted.len(), 2);
        for score in weighted.values() {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn concept_relations_follow_word_relations() {
        let adaptor = adaptor();
        let king = Concept::from_word("king");
        let queen = Concept::from_word("queen");
        let apple = Concept::from_word("apple");

        let close = adaptor.concept_relations(&king, &queen).unwrap();
        assert!(close.contains(&ConceptRelation::Relatedness));
        assert!(close.contains(&ConceptRelation::Similarity));

        let far = adaptor.concept_relations(&king, &apple).unwrap();
        assert!(far.is_empty());

        let weighted = adaptor.concept_relations_weighted(&king, &queen).unwrap();
        assert_eq!(
            weighted[&ConceptRelation::Relatedness],
            weighted[&ConceptRelation::Similarity]
        );
    }

    #[test]
    fn structural_operations_are_unsupported() {
        let adaptor = adaptor();
        let concept = Concept::from_word("king");
        let domains = HashSet::new();

        assert!(adaptor.word_languages(None, "king").unwrap_err().is_unsupported());
        assert!(adaptor.word_domains(None, "king").unwrap_err().is_unsupported());
        assert!(adaptor
            .word_domains_weighted(None, "king", &domains)
            .unwrap_err()
            .is_unsupported());
        assert!(adaptor
            .constrained_concepts(None, None, "king", &concept)
            .unwrap_err()
            .is_unsupported());
        assert!(adaptor
            .constrained_concepts_weighted(None, None, "king", &concept)
            .unwrap_err()
            .is_unsupported());
        assert!(adaptor.gloss(None, &concept).unwrap_err().is_unsupported());
        assert!(adaptor.concept_languages(&concept).unwrap_err().is_unsupported());
        assert!(adaptor.concept_domains(&concept).unwrap_err().is_unsupported());
        assert!(adaptor
            .concept_domains_weighted(&concept)
            .unwrap_err()
            .is_unsupported());
        assert!(adaptor.languages().unwrap_err().is_unsupported());
        assert!(adaptor.domains().unwrap_err().is_unsupported());
    }
}
