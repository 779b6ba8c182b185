//! The ontology graph: term storage, closures, depths, paths and search

use core::fmt::Debug;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::term::internal::GoTermInternal;
use crate::term::{GoGroup, GoTerm, GoTermId, Relation, RelationFilter};

mod builder;
pub mod path;

pub use builder::Builder;
pub use path::{DownwardPath, LcaPath, PathStep, TermRelationship};

/// `Ontology` is the central data structure of `gosim`
///
/// It owns all [`GoTerm`]s and their parent/child edges and answers every
/// graph query: ancestor and descendant closures, depths, neighborhoods,
/// downward paths, lowest-common-ancestor paths and text search.
///
/// An `Ontology` is built once through [`Builder`] and is immutable and
/// `Sync` afterwards; all queries take `&self`. Unknown ids never produce
/// an error but degrade to `None` or empty results, so stale or
/// user-supplied ids cannot crash a caller.
///
/// # Examples
///
/// ```
/// use gosim::ontology::Builder;
/// use gosim::RelationFilter;
///
/// let mut builder = Builder::new();
/// builder.add_term("GO:0000001", "root", "biological_process").unwrap();
/// builder.add_term("GO:0000002", "signaling", "biological_process").unwrap();
/// builder.add_parent("GO:0000002", "GO:0000001", "is_a").unwrap();
/// let ontology = builder.build();
///
/// let ancestors = ontology.ancestor_ids(2u32.into(), &RelationFilter::is_a());
/// assert!(ancestors.contains(&1u32.into()));
/// assert!(ancestors.contains(&2u32.into()));
/// ```
#[derive(Default)]
pub struct Ontology {
    terms: HashMap<GoTermId, GoTermInternal>,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.terms.len())
    }
}

/// The one-hop surrounding of a term, filtered by relation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    /// Direct parents and the relation of each edge
    pub parents: HashMap<GoTermId, Relation>,
    /// Direct children and the relation of each edge
    pub children: HashMap<GoTermId, Relation>,
}

impl Ontology {
    pub(crate) fn new(terms: HashMap<GoTermId, GoTermInternal>) -> Self {
        Ontology { terms }
    }

    pub(crate) fn get(&self, id: GoTermId) -> Option<&GoTermInternal> {
        self.terms.get(&id)
    }

    /// Returns the term with the given id, `None` if it does not exist
    pub fn term(&self, id: GoTermId) -> Option<GoTerm<'_>> {
        self.get(id).map(|term| GoTerm::new(self, term))
    }

    /// Number of terms in the ontology
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the ontology does not contain any terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates all term ids
    pub fn term_ids(&self) -> impl Iterator<Item = GoTermId> + '_ {
        self.terms.keys().copied()
    }

    /// Iterates all terms
    pub fn terms(&self) -> impl Iterator<Item = GoTerm<'_>> {
        self.terms.values().map(|term| GoTerm::new(self, term))
    }

    /// All ancestors of a term, following only parent edges whose relation
    /// passes `filter`
    ///
    /// The returned closure includes the starting term itself. Diamond
    /// inheritance is handled by a visited-set guard, every ancestor appears
    /// once. An unknown id yields an empty set.
    pub fn ancestor_ids(&self, id: GoTermId, filter: &RelationFilter) -> GoGroup {
        self.closure(id, filter, |term| term.parents())
    }

    /// All descendants of a term, the mirror image of [`Ontology::ancestor_ids`]
    pub fn descendant_ids(&self, id: GoTermId, filter: &RelationFilter) -> GoGroup {
        self.closure(id, filter, |term| term.children())
    }

    /// Breadth-first closure over either the parent or the child edge maps
    fn closure<'a, F>(&'a self, id: GoTermId, filter: &RelationFilter, edges: F) -> GoGroup
    where
        F: Fn(&'a GoTermInternal) -> &'a HashMap<GoTermId, Relation>,
    {
        if !self.terms.contains_key(&id) {
            return GoGroup::default();
        }

        let mut result = GoGroup::default();
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            if !result.insert(current) {
                continue;
            }
            // Edges can point to ids outside the ontology, those end the traversal
            let Some(term) = self.terms.get(&current) else {
                continue;
            };
            for (&next, &relation) in edges(term) {
                if filter.matches(relation) {
                    queue.push_back(next);
                }
            }
        }
        result
    }

    /// The depth of a term: the longest path to any root, roots have depth 0
    ///
    /// Depths are precomputed when the ontology is built. Unknown ids return
    /// `None` rather than a numeric default, so they cannot be mistaken for
    /// a root.
    pub fn depth_of(&self, id: GoTermId) -> Option<u32> {
        self.get(id).map(GoTermInternal::depth)
    }

    /// The direct parents and children of a term, keeping only edges whose
    /// relation passes `filter`
    ///
    /// An unknown id yields an empty neighborhood.
    pub fn neighborhood(&self, id: GoTermId, filter: &RelationFilter) -> Neighborhood {
        let Some(term) = self.get(id) else {
            return Neighborhood::default();
        };
        let keep = |map: &HashMap<GoTermId, Relation>| {
            map.iter()
                .filter(|(_, &relation)| filter.matches(relation))
                .map(|(&id, &relation)| (id, relation))
                .collect()
        };
        Neighborhood {
            parents: keep(term.parents()),
            children: keep(term.children()),
        }
    }

    /// The shortest path from `start` down to `end`, strictly along child
    /// edges
    ///
    /// Breadth-first search guarantees a path minimal in edge count; when
    /// several such paths exist, the returned one depends on map iteration
    /// order. `start == end` yields a single-step path without a relation.
    /// Returns `None` if `end` is not reachable downward from `start` or if
    /// either id is unknown.
    pub fn shortest_downward_path(&self, start: GoTermId, end: GoTermId) -> Option<DownwardPath> {
        if !self.terms.contains_key(&start) || !self.terms.contains_key(&end) {
            return None;
        }

        let mut predecessor: HashMap<GoTermId, GoTermId> = HashMap::new();
        let mut visited: HashSet<GoTermId> = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        let mut found = start == end;
        'search: while !found {
            let Some(current) = queue.pop_front() else {
                break;
            };
            let Some(term) = self.terms.get(&current) else {
                continue;
            };
            for &child in term.children().keys() {
                if visited.insert(child) {
                    predecessor.insert(child, current);
                    if child == end {
                        found = true;
                        break 'search;
                    }
                    queue.push_back(child);
                }
            }
        }
        if !found {
            return None;
        }

        let mut ids = vec![end];
        while let Some(&previous) = predecessor.get(ids.last().expect("path is never empty")) {
            ids.push(previous);
        }
        ids.reverse();

        let steps = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| PathStep {
                term_id: id,
                relation_to_next: ids.get(i + 1).map(|next| {
                    *self.terms[&id]
                        .children()
                        .get(next)
                        .expect("path follows existing child edges")
                }),
            })
            .collect();
        Some(DownwardPath::new(steps))
    }

    /// The lowest common ancestor of two terms and the downward paths from
    /// it to each of them
    ///
    /// Both `is_a` ancestor closures (including the terms themselves) are
    /// intersected and the member with the maximum depth is selected. Ties
    /// are broken arbitrarily. Returns `None` if the terms share no ancestor
    /// or a downward path is missing (checked, although a correctly chosen
    /// LCA always has one).
    pub fn lca_path(&self, a: GoTermId, b: GoTermId) -> Option<LcaPath> {
        let filter = RelationFilter::is_a();
        let ancestors_a = self.ancestor_ids(a, &filter);
        let ancestors_b = self.ancestor_ids(b, &filter);

        let lca = ancestors_a
            .intersection(&ancestors_b)
            .copied()
            .max_by_key(|&id| self.depth_of(id).unwrap_or(0))?;

        let path_a = self.shortest_downward_path(lca, a)?;
        let path_b = self.shortest_downward_path(lca, b)?;
        Some(LcaPath { lca, path_a, path_b })
    }

    /// How two terms relate: a direct downward path in either direction is
    /// preferred over a shared ancestor
    ///
    /// Returns `None` if neither a direct path nor a common ancestor exists,
    /// or if either id is unknown.
    pub fn relationship_between(&self, a: GoTermId, b: GoTermId) -> Option<TermRelationship> {
        if let Some(path) = self.shortest_downward_path(a, b) {
            return Some(TermRelationship::Direct { from: a, to: b, path });
        }
        if let Some(path) = self.shortest_downward_path(b, a) {
            return Some(TermRelationship::Direct { from: b, to: a, path });
        }
        self.lca_path(a, b).map(TermRelationship::CommonAncestor)
    }

    /// Case-insensitive search over ids, names and synonyms
    ///
    /// Matches are tiered: exact id, partial id, exact name, exact synonym,
    /// partial name, partial synonym. Each term is placed in the first tier
    /// it qualifies for only, and tiers are concatenated in that order.
    pub fn search(&self, query: &str) -> Vec<GoTerm<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut exact_id = Vec::new();
        let mut partial_id = Vec::new();
        let mut exact_name = Vec::new();
        let mut exact_synonym = Vec::new();
        let mut partial_name = Vec::new();
        let mut partial_synonym = Vec::new();

        for term in self.terms.values() {
            let id = term.id().to_string().to_lowercase();
            let name = term.name().to_lowercase();
            let synonyms: Vec<String> =
                term.synonyms().iter().map(|s| s.to_lowercase()).collect();

            if query == id {
                exact_id.push(term);
            } else if id.contains(&query) {
                partial_id.push(term);
            } else if query == name {
                exact_name.push(term);
            } else if synonyms.iter().any(|synonym| *synonym == query) {
                exact_synonym.push(term);
            } else if name.contains(&query) {
                partial_name.push(term);
            } else if synonyms.iter().any(|synonym| synonym.contains(&query)) {
                partial_synonym.push(term);
            }
        }

        exact_id
            .into_iter()
            .chain(partial_id)
            .chain(exact_name)
            .chain(exact_synonym)
            .chain(partial_name)
            .chain(partial_synonym)
            .map(|term| GoTerm::new(self, term))
            .collect()
    }
}
