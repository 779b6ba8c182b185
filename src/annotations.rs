//! Genes and their GAF-style GO annotations

mod collection;
mod evidence;
mod gene;

pub use collection::{AnnotationStatus, GeneCollection};
pub use evidence::EvidenceCode;
pub use gene::{Annotation, Gene, GeneId};
