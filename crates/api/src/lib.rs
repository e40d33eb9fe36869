//! Shared vocabulary for lexical-semantic resources.
//!
//! This crate defines the abstract query interface ([`LexicalResource`]) and the
//! types it speaks: words, concepts, languages, domains and the relations that
//! can hold between them. Backends implement whatever subset their underlying
//! resource supports and report the rest as [`LexicalError::Unsupported`].

mod error;
mod resource;
mod types;

pub use error::{LexicalError, Result};
pub use resource::LexicalResource;
pub use types::{Concept, ConceptRelation, Domain, WordRelation};
