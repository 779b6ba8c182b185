//! GO terms and their building blocks: ids, relations, namespaces

use std::collections::{HashMap, HashSet};

use crate::similarity::Similarity;
use crate::Ontology;

pub(crate) mod internal;
mod namespace;
mod relation;
mod termid;

pub use namespace::Namespace;
pub use relation::{Relation, RelationFilter};
pub use termid::GoTermId;

/// A set of term ids, e.g. an ancestor or descendant closure
pub type GoGroup = HashSet<GoTermId>;

/// A single GO term, borrowed from the [`Ontology`]
///
/// `GoTerm` is a lightweight view: it holds references into the ontology's
/// storage plus a reference to the ontology itself, so graph traversals can
/// be started directly from a term.
#[derive(Clone, Copy)]
pub struct GoTerm<'a> {
    id: GoTermId,
    name: &'a str,
    namespace: Namespace,
    synonyms: &'a [String],
    parents: &'a HashMap<GoTermId, Relation>,
    children: &'a HashMap<GoTermId, Relation>,
    depth: u32,
    ontology: &'a Ontology,
}

impl<'a> GoTerm<'a> {
    pub(crate) fn new(ontology: &'a Ontology, term: &'a internal::GoTermInternal) -> GoTerm<'a> {
        GoTerm {
            id: term.id(),
            name: term.name(),
            namespace: term.namespace(),
            synonyms: term.synonyms(),
            parents: term.parents(),
            children: term.children(),
            depth: term.depth(),
            ontology,
        }
    }

    /// The [`GoTermId`] of the term, e.g. `GO:0008150`
    pub fn id(&self) -> GoTermId {
        self.id
    }

    /// The name of the term, e.g. `biological_process`
    pub fn name(&self) -> &str {
        self.name
    }

    /// The GO namespace the term belongs to
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Alternative names of the term
    pub fn synonyms(&self) -> &[String] {
        self.synonyms
    }

    /// The direct parents with the relation of each connecting edge
    pub fn parent_ids(&self) -> &HashMap<GoTermId, Relation> {
        self.parents
    }

    /// The direct children with the relation of each connecting edge
    pub fn child_ids(&self) -> &HashMap<GoTermId, Relation> {
        self.children
    }

    /// The longest path from any root term, roots have depth `0`
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// All ancestors reachable through edges matching `filter`, including `self`
    pub fn ancestor_ids(&self, filter: &RelationFilter) -> GoGroup {
        self.ontology.ancestor_ids(self.id, filter)
    }

    /// All descendants reachable through edges matching `filter`, including `self`
    pub fn descendant_ids(&self, filter: &RelationFilter) -> GoGroup {
        self.ontology.descendant_ids(self.id, filter)
    }

    /// Returns `true` if `self` is a (direct or indirect) `is_a` descendant of `other`
    pub fn child_of(&self, other: &GoTerm) -> bool {
        self.id != other.id() && self.ancestor_ids(&RelationFilter::is_a()).contains(&other.id())
    }

    /// Returns `true` if `self` is a (direct or indirect) `is_a` ancestor of `other`
    pub fn parent_of(&self, other: &GoTerm) -> bool {
        other.child_of(self)
    }

    /// Calculates the similarity of `self` and `other` using the provided
    /// [`Similarity`] algorithm
    pub fn similarity_score(&self, other: &GoTerm, similarity: &impl Similarity) -> f32 {
        similarity.calculate(self, other)
    }

    pub(crate) fn ontology(&self) -> &'a Ontology {
        self.ontology
    }
}

impl PartialEq for GoTerm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GoTerm<'_> {}

impl std::fmt::Debug for GoTerm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTerm({}: {})", self.id, self.name)
    }
}
