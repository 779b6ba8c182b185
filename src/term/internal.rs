use std::collections::HashMap;

use crate::term::{GoTermId, Namespace, Relation};

/// Owned storage of a single term inside the [`crate::Ontology`]
///
/// The `children` map is fully derived: it is populated in a single pass
/// after all terms are loaded, as the inverse of every `parents` entry.
/// `depth` is likewise filled in during [`crate::ontology::Builder::build`].
#[derive(Debug)]
pub(crate) struct GoTermInternal {
    id: GoTermId,
    name: String,
    namespace: Namespace,
    synonyms: Vec<String>,
    parents: HashMap<GoTermId, Relation>,
    children: HashMap<GoTermId, Relation>,
    depth: u32,
}

impl GoTermInternal {
    pub fn new(id: GoTermId, name: String, namespace: Namespace) -> GoTermInternal {
        GoTermInternal {
            id,
            name,
            namespace,
            synonyms: Vec::new(),
            parents: HashMap::new(),
            children: HashMap::new(),
            depth: 0,
        }
    }

    pub fn id(&self) -> GoTermId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn parents(&self) -> &HashMap<GoTermId, Relation> {
        &self.parents
    }

    pub fn children(&self) -> &HashMap<GoTermId, Relation> {
        &self.children
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn add_synonym(&mut self, synonym: String) {
        self.synonyms.push(synonym);
    }

    pub fn add_parent(&mut self, parent_id: GoTermId, relation: Relation) {
        self.parents.insert(parent_id, relation);
    }

    pub fn add_child(&mut self, child_id: GoTermId, relation: Relation) {
        self.children.insert(child_id, relation);
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }
}

impl PartialEq for GoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GoTermInternal {}
