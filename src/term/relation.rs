use std::fmt::Display;
use std::str::FromStr;

use smallvec::{smallvec, SmallVec};

use crate::GoError;

/// The label of an edge between two terms in the ontology
///
/// `is_a` edges form the primary subsumption hierarchy, the other relations
/// connect terms across it (e.g. `part_of` between a component and its whole).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Relation {
    /// Subtype relation, the backbone of the ontology
    IsA,
    /// Component to whole
    PartOf,
    /// One process modulates another
    Regulates,
    /// Positive modulation
    PositivelyRegulates,
    /// Negative modulation
    NegativelyRegulates,
    /// A process occurring within a component
    OccursIn,
}

impl Relation {
    /// The OBO-style label of the relation, e.g. `is_a`
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::IsA => "is_a",
            Relation::PartOf => "part_of",
            Relation::Regulates => "regulates",
            Relation::PositivelyRegulates => "positively_regulates",
            Relation::NegativelyRegulates => "negatively_regulates",
            Relation::OccursIn => "occurs_in",
        }
    }
}

impl FromStr for Relation {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is_a" => Ok(Relation::IsA),
            "part_of" => Ok(Relation::PartOf),
            "regulates" => Ok(Relation::Regulates),
            "positively_regulates" => Ok(Relation::PositivelyRegulates),
            "negatively_regulates" => Ok(Relation::NegativelyRegulates),
            "occurs_in" => Ok(Relation::OccursIn),
            _ => Err(GoError::UnknownRelation(s.to_string())),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restricts graph traversals to a subset of edge relations
///
/// Most queries default to [`RelationFilter::is_a`], following only the
/// subsumption hierarchy. [`RelationFilter::Any`] is the unrestricted
/// sentinel that follows every edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationFilter {
    /// Follow every edge, regardless of its relation
    Any,
    /// Follow only edges with one of the given relations
    Only(SmallVec<[Relation; 2]>),
}

impl RelationFilter {
    /// The default filter: `is_a` edges only
    pub fn is_a() -> Self {
        RelationFilter::Only(smallvec![Relation::IsA])
    }

    /// Returns `true` if an edge with the given relation passes the filter
    pub fn matches(&self, relation: Relation) -> bool {
        match self {
            RelationFilter::Any => true,
            RelationFilter::Only(relations) => relations.contains(&relation),
        }
    }
}

impl Default for RelationFilter {
    fn default() -> Self {
        RelationFilter::is_a()
    }
}

impl From<Relation> for RelationFilter {
    fn from(relation: Relation) -> Self {
        RelationFilter::Only(smallvec![relation])
    }
}

impl FromIterator<Relation> for RelationFilter {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        RelationFilter::Only(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for label in [
            "is_a",
            "part_of",
            "regulates",
            "positively_regulates",
            "negatively_regulates",
            "occurs_in",
        ] {
            let relation: Relation = label.parse().unwrap();
            assert_eq!(relation.to_string(), label);
        }
    }

    #[test]
    fn unknown_relation() {
        assert_eq!(
            "has_part".parse::<Relation>(),
            Err(GoError::UnknownRelation(String::from("has_part")))
        );
    }

    #[test]
    fn default_filter_is_is_a() {
        let filter = RelationFilter::default();
        assert!(filter.matches(Relation::IsA));
        assert!(!filter.matches(Relation::PartOf));
    }

    #[test]
    fn any_matches_everything() {
        assert!(RelationFilter::Any.matches(Relation::Regulates));
    }

    #[test]
    fn filter_from_iterator() {
        let filter: RelationFilter = [Relation::IsA, Relation::PartOf].into_iter().collect();
        assert!(filter.matches(Relation::PartOf));
        assert!(!filter.matches(Relation::OccursIn));
    }
}
