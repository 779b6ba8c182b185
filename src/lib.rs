//! `gosim` computes semantic similarity between Gene Ontology terms and
//! between genes annotated with them.
//!
//! The crate is built around an immutable [`Ontology`] snapshot: terms and
//! their `is_a` / `part_of` / ... edges are loaded once through
//! [`ontology::Builder`], after which every query (ancestor closures, depths,
//! paths, searches) is read-only. Genes and their GAF-style annotations live
//! in a [`GeneCollection`], from which an [`InformationContent`] model can be
//! derived. Term-to-term scores are computed by [`similarity::Similarity`]
//! strategies and aggregated to gene-to-gene scores and similarity matrices
//! by [`similarity::GeneSimilarity`].
//!
//! # Examples
//!
//! ```
//! use gosim::ontology::Builder;
//! use gosim::similarity::{Jaccard, Similarity};
//!
//! let mut builder = Builder::new();
//! builder.add_term("GO:0000001", "root", "biological_process").unwrap();
//! builder.add_term("GO:0000002", "child", "biological_process").unwrap();
//! builder.add_parent("GO:0000002", "GO:0000001", "is_a").unwrap();
//! let ontology = builder.build();
//!
//! let root = ontology.term(1u32.into()).unwrap();
//! let child = ontology.term(2u32.into()).unwrap();
//!
//! assert_eq!(child.depth(), 1);
//! assert_eq!(Jaccard::default().calculate(&root, &child), 0.5);
//! ```

use std::num::ParseIntError;

use thiserror::Error;

pub mod annotations;
pub mod information_content;
pub mod matrix;
pub mod ontology;
pub mod similarity;
pub mod term;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use annotations::{Gene, GeneCollection, GeneId};
pub use information_content::InformationContent;
pub use ontology::Ontology;
pub use similarity::Similarity;
pub use term::{GoTerm, GoTermId, Namespace, Relation, RelationFilter};

/// Largest numerical value of a `GO:xxxxxxx` id (7 digits)
const MAX_GO_ID_INTEGER: u32 = 10_000_000;

/// Number of top-scoring term pairs reported per gene comparison
const NUM_TOP_MATCHES: usize = 5;

/// Error variants of `gosim`
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GoError {
    /// The requested term or gene is not part of the ontology
    #[error("term does not exist")]
    DoesNotExist,
    /// The string is not a valid `GO:xxxxxxx` term id
    #[error("invalid term id: {0}")]
    InvalidTermId(String),
    /// The string is not a known edge relation label
    #[error("unknown relation: {0}")]
    UnknownRelation(String),
    /// The string is not one of the three GO namespaces
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
    /// The string does not name a built-in similarity strategy
    #[error("unknown similarity strategy: {0}")]
    UnknownStrategy(String),
    /// The string does not name a known GAF evidence code
    #[error("unknown evidence code: {0}")]
    UnknownEvidenceCode(String),
    /// The gene is not part of the collection
    #[error("gene not found: {0}")]
    GeneNotFound(String),
}

impl From<ParseIntError> for GoError {
    fn from(err: ParseIntError) -> Self {
        GoError::InvalidTermId(err.to_string())
    }
}

/// Crate-wide `Result` alias
pub type GoResult<T> = Result<T, GoError>;
