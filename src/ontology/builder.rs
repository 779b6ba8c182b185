use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use crate::term::internal::GoTermInternal;
use crate::term::{GoTermId, Namespace, Relation};
use crate::{GoError, GoResult, Ontology};

/// Assembles an immutable [`Ontology`] snapshot
///
/// The builder collects terms and parent edges in any order, e.g. from an
/// OBO decoder. [`Builder::build`] then derives the inverse child edges and
/// precomputes all term depths, producing a read-only [`Ontology`].
/// Reloading an updated ontology means building a new snapshot and swapping
/// the reference, never mutating a built one.
///
/// # Examples
///
/// ```
/// use gosim::ontology::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_term("GO:0008150", "biological_process", "biological_process").unwrap();
/// builder.add_term("GO:0008152", "metabolic process", "biological_process").unwrap();
/// builder.add_parent("GO:0008152", "GO:0008150", "is_a").unwrap();
///
/// let ontology = builder.build();
/// assert_eq!(ontology.len(), 2);
/// ```
#[derive(Default)]
pub struct Builder {
    terms: HashMap<GoTermId, GoTermInternal>,
}

impl Builder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Builder::default()
    }

    /// Adds a term, parsing id and namespace from their string forms
    ///
    /// Re-adding an existing id is a no-op, the first definition wins.
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidTermId`] or [`GoError::UnknownNamespace`] if the
    /// string forms do not parse
    pub fn add_term(&mut self, id: &str, name: &str, namespace: &str) -> GoResult<GoTermId> {
        let id = GoTermId::try_from(id)?;
        let namespace: Namespace = namespace.parse()?;
        if let Entry::Vacant(entry) = self.terms.entry(id) {
            entry.insert(GoTermInternal::new(id, name.to_string(), namespace));
        }
        Ok(id)
    }

    /// Adds a synonym to an already added term
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if the term was not added before
    pub fn add_synonym(&mut self, id: GoTermId, synonym: &str) -> GoResult<()> {
        self.terms
            .get_mut(&id)
            .ok_or(GoError::DoesNotExist)?
            .add_synonym(synonym.to_string());
        Ok(())
    }

    /// Records a `child --relation--> parent` edge
    ///
    /// Both ids and the relation label are parsed from their string forms.
    /// Edges referring to terms that are never added are dropped with a
    /// warning during [`Builder::build`].
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidTermId`], [`GoError::UnknownRelation`] or
    /// [`GoError::DoesNotExist`] if the child term is unknown
    pub fn add_parent(&mut self, child: &str, parent: &str, relation: &str) -> GoResult<()> {
        let child = GoTermId::try_from(child)?;
        let parent = GoTermId::try_from(parent)?;
        let relation: Relation = relation.parse()?;
        self.terms
            .get_mut(&child)
            .ok_or(GoError::DoesNotExist)?
            .add_parent(parent, relation);
        Ok(())
    }

    /// Derives child edges and depths and returns the finished [`Ontology`]
    pub fn build(mut self) -> Ontology {
        self.link_children();
        self.calculate_depths();
        debug!("built ontology with {} terms", self.terms.len());
        Ontology::new(self.terms)
    }

    /// Populates every term's `children` map as the exact inverse of the
    /// recorded parent edges. Parent ids without a matching term are dropped.
    fn link_children(&mut self) {
        let mut edges: Vec<(GoTermId, GoTermId, Relation)> = Vec::new();
        for term in self.terms.values() {
            for (&parent_id, &relation) in term.parents() {
                edges.push((parent_id, term.id(), relation));
            }
        }
        for (parent_id, child_id, relation) in edges {
            match self.terms.get_mut(&parent_id) {
                Some(parent) => parent.add_child(child_id, relation),
                None => warn!("dropping edge {child_id} -> unknown parent {parent_id}"),
            }
        }
    }

    /// Computes each term's depth: the longest path to any root, following
    /// parent edges of every relation.
    ///
    /// Uses topological relaxation from the roots downward, so the built
    /// ontology needs no lazily grown cache and stays `Sync`. Terms on a
    /// cycle never enter the ordering and keep depth 0; cycles are assumed
    /// absent but not rejected.
    fn calculate_depths(&mut self) {
        let mut remaining: HashMap<GoTermId, usize> = self
            .terms
            .values()
            .map(|term| {
                let known_parents = term
                    .parents()
                    .keys()
                    .filter(|id| self.terms.contains_key(id))
                    .count();
                (term.id(), known_parents)
            })
            .collect();

        let mut depths: HashMap<GoTermId, u32> = HashMap::with_capacity(self.terms.len());
        let mut queue: VecDeque<GoTermId> = remaining
            .iter()
            .filter(|(_, &parents)| parents == 0)
            .map(|(&id, _)| id)
            .collect();

        while let Some(id) = queue.pop_front() {
            let depth = self.terms[&id]
                .parents()
                .keys()
                .filter_map(|parent_id| depths.get(parent_id))
                .max()
                .map_or(0, |max| max + 1);
            depths.insert(id, depth);

            let children: Vec<GoTermId> = self.terms[&id].children().keys().copied().collect();
            for child_id in children {
                let pending = remaining
                    .get_mut(&child_id)
                    .expect("every child id belongs to a term");
                *pending -= 1;
                if *pending == 0 {
                    queue.push_back(child_id);
                }
            }
        }

        if depths.len() < self.terms.len() {
            warn!(
                "{} terms are part of a cycle and keep depth 0",
                self.terms.len() - depths.len()
            );
        }

        for term in self.terms.values_mut() {
            if let Some(&depth) = depths.get(&term.id()) {
                term.set_depth(depth);
            }
        }
    }
}
