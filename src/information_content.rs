//! Annotation-frequency based information content of GO terms

use std::collections::HashMap;

use tracing::debug;

use crate::annotations::GeneCollection;
use crate::term::{GoTermId, RelationFilter};
use crate::Ontology;

/// The information content of every annotated term in the ontology
///
/// The IC of a term measures how rare, and therefore how specific, its
/// usage is: `ic = -ln(p)` with `p` the fraction of all genes annotated to
/// the term or any of its `is_a` descendants. A term covering every gene
/// scores 0, rarer terms score higher.
///
/// The model is derived once from an [`Ontology`] and a [`GeneCollection`]
/// and is read-only afterwards. Terms without any recursively annotated
/// gene are not part of the model at all; [`InformationContent::get`]
/// returns `None` for them (and for unknown ids), which similarity
/// strategies treat as a zero contribution.
///
/// # Examples
///
/// ```
/// use gosim::{GeneCollection, InformationContent};
/// use gosim::annotations::Gene;
/// use gosim::ontology::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_term("GO:0000001", "root", "biological_process").unwrap();
/// let ontology = builder.build();
///
/// let mut gene = Gene::new("P00001".into(), "ABC1", "ABC one");
/// gene.add_annotation(
///     1u32.into(),
///     "IDA".parse().unwrap(),
///     gosim::Namespace::BiologicalProcess,
///     "enables",
/// );
/// let genes = GeneCollection::new(vec![gene]);
///
/// let ic = InformationContent::new(&ontology, &genes);
/// // the root covers the single gene, so it carries no information
/// assert_eq!(ic.get(1u32.into()), Some(0.0));
/// ```
#[derive(Debug, Default)]
pub struct InformationContent {
    ic: HashMap<GoTermId, f32>,
}

impl InformationContent {
    /// Computes the information content of every annotated term
    ///
    /// For each term the recursive gene count is the number of distinct
    /// genes validly annotated to the term or any `is_a` descendant. The
    /// probability divides by the total gene count of the collection, not
    /// only the annotated genes; the `max(count, 1)` clamp only guards
    /// against `ln(0)`, a retained term always has a positive count.
    pub fn new(ontology: &Ontology, genes: &GeneCollection) -> Self {
        let total = genes.len();
        if total == 0 {
            return InformationContent::default();
        }

        let filter = RelationFilter::is_a();
        let mut ic = HashMap::new();
        for term_id in ontology.term_ids() {
            let count = genes.genes_for_term_recursive(term_id, ontology, &filter).len();
            if count == 0 {
                continue;
            }
            let probability = count.max(1) as f32 / total as f32;
            ic.insert(term_id, -probability.ln());
        }

        debug!("information content for {} of {} terms", ic.len(), ontology.len());
        InformationContent { ic }
    }

    /// The information content of a term
    ///
    /// `None` for terms without recursively annotated genes and for
    /// unknown ids.
    pub fn get(&self, term_id: GoTermId) -> Option<f32> {
        self.ic.get(&term_id).copied()
    }

    /// Number of terms with a recorded information content
    pub fn len(&self) -> usize {
        self.ic.len()
    }

    /// Returns `true` if no term has a recorded information content
    pub fn is_empty(&self) -> bool {
        self.ic.is_empty()
    }

    /// Iterates all `(term id, ic)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (GoTermId, f32)> + '_ {
        self.ic.iter().map(|(&id, &ic)| (id, ic))
    }
}
