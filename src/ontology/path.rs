use crate::term::{GoTermId, Relation};

/// One node of a downward path through the ontology
///
/// `relation_to_next` is the label of the edge towards the next step of the
/// path. The final step has no outgoing edge and carries `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep {
    /// The term at this position of the path
    pub term_id: GoTermId,
    /// The relation of the edge to the following step, `None` on the last step
    pub relation_to_next: Option<Relation>,
}

/// An ordered path from an ancestor down to a descendant
///
/// Produced by [`crate::Ontology::shortest_downward_path`]. The path is
/// minimal in edge count; when several equally short paths exist, which one
/// is returned depends on map iteration order and is not guaranteed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownwardPath {
    steps: Vec<PathStep>,
}

impl DownwardPath {
    pub(crate) fn new(steps: Vec<PathStep>) -> Self {
        DownwardPath { steps }
    }

    /// The steps of the path, starting at the ancestor
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of terms on the path (edges + 1)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the path contains no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The term ids of the path in order
    pub fn term_ids(&self) -> impl Iterator<Item = GoTermId> + '_ {
        self.steps.iter().map(|step| step.term_id)
    }
}

/// The lowest common ancestor of two terms and the paths down to each
///
/// When several common ancestors share the maximum depth, any one of them
/// may be selected as `lca`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcaPath {
    /// The deepest common ancestor of the two query terms
    pub lca: GoTermId,
    /// Path from the LCA down to the first query term
    pub path_a: DownwardPath,
    /// Path from the LCA down to the second query term
    pub path_b: DownwardPath,
}

/// How two terms are related to each other
///
/// A direct containment relationship is reported in preference to a shared
/// ancestor: [`crate::Ontology::relationship_between`] first tries a
/// downward path in either direction and only falls back to the LCA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermRelationship {
    /// One term is a descendant of the other
    Direct {
        /// The ancestor the path starts from
        from: GoTermId,
        /// The descendant the path leads to
        to: GoTermId,
        /// The connecting downward path
        path: DownwardPath,
    },
    /// The terms are only related through a common ancestor
    CommonAncestor(LcaPath),
}
