//! word2vec backend for the lexical-semantic query interface.
//!
//! Adapts a pre-trained embedding model (loaded by `lexsem-vectors`) to the
//! [`LexicalResource`](lexsem_api::LexicalResource) trait. A flat vector space
//! only supports undifferentiated relatedness: the adaptor answers
//! nearest-neighbor and pairwise-similarity queries and reports every operation
//! that needs real lexical structure (synonymy vs. antonymy, languages,
//! domains, concept hierarchies, glosses) as unsupported.

mod adaptor;

pub use adaptor::{Word2VecAdaptor, DEFAULT_RELATED_WORD_LIMIT, DEFAULT_SIMILARITY_THRESHOLD};
