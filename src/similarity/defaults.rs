//! The built-in similarity algorithms: Jaccard, Wu-Palmer and Resnik
//!
//! All of them can also be accessed via [`crate::similarity::Builtins`].

use crate::similarity::{usize_to_f32, Similarity};
use crate::term::{GoTerm, RelationFilter};
use crate::InformationContent;

/// Ancestor-set overlap similarity
///
/// `Jaccard(A, B) = |anc(A) ∩ anc(B)| / |anc(A) ∪ anc(B)|` where `anc`
/// is the inclusive-self ancestor closure under the configured relation
/// filter (`is_a` by default). Identical terms score `1.0`, terms without
/// any shared ancestor score `0.0`.
///
/// # Examples
///
/// ```
/// use gosim::similarity::Jaccard;
/// use gosim::RelationFilter;
///
/// // follow only the subsumption hierarchy
/// let jaccard = Jaccard::default();
///
/// // or follow every edge relation
/// let jaccard = Jaccard::new(RelationFilter::Any);
/// ```
#[derive(Debug, Default)]
pub struct Jaccard {
    filter: RelationFilter,
}

impl Jaccard {
    /// Constructs a `Jaccard` strategy traversing edges matching `filter`
    pub fn new(filter: RelationFilter) -> Self {
        Self { filter }
    }
}

impl Similarity for Jaccard {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        let ancestors_a = a.ancestor_ids(&self.filter);
        let ancestors_b = b.ancestor_ids(&self.filter);

        let union = ancestors_a.union(&ancestors_b).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = ancestors_a.intersection(&ancestors_b).count();

        usize_to_f32(intersection) / usize_to_f32(union)
    }
}

/// Depth-ratio similarity after Wu & Palmer
///
/// `WuPalmer(A, B) = 2 * depth(LCA) / (depth(A) + depth(B))` with the LCA
/// being the deepest common `is_a` ancestor. Terms sharing a deep ancestor
/// are similar; terms meeting only at a root score `0.0`. The score lies
/// in `[0, 1]` whenever a common ancestor exists and the denominator is
/// positive.
#[derive(Debug, Default)]
pub struct WuPalmer {}

impl WuPalmer {
    /// Constructs a new Wu-Palmer strategy
    pub fn new() -> Self {
        Self::default()
    }
}

impl Similarity for WuPalmer {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        let filter = RelationFilter::is_a();
        let ancestors_a = a.ancestor_ids(&filter);
        let ancestors_b = b.ancestor_ids(&filter);
        let ontology = a.ontology();

        let Some(lca_depth) = ancestors_a
            .intersection(&ancestors_b)
            .filter_map(|&id| ontology.depth_of(id))
            .max()
        else {
            return 0.0;
        };

        let denominator = a.depth() + b.depth();
        if denominator == 0 {
            return 0.0;
        }

        2.0 * lca_depth as f32 / denominator as f32
    }
}

/// Information-content similarity after Resnik
///
/// The score is the maximum [`InformationContent`] among the common `is_a`
/// ancestors of the two terms. Common ancestors without a recorded IC
/// (no recursively annotated gene) contribute `0`; no common ancestor at
/// all scores `0.0`. Unlike the other strategies, the score is not
/// bounded by `1`.
#[derive(Debug)]
pub struct Resnik<'a> {
    ic: &'a InformationContent,
}

impl<'a> Resnik<'a> {
    /// Constructs a Resnik strategy drawing term ICs from `ic`
    pub fn new(ic: &'a InformationContent) -> Self {
        Self { ic }
    }
}

impl Similarity for Resnik<'_> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        let filter = RelationFilter::is_a();
        let ancestors_a = a.ancestor_ids(&filter);
        let ancestors_b = b.ancestor_ids(&filter);

        ancestors_a
            .intersection(&ancestors_b)
            .filter_map(|&id| self.ic.get(id))
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::similarity::Builtins;
    use crate::test_fixtures::{chain_ontology, collection, diamond_ontology, gene, term};
    use crate::GoError;

    #[test]
    fn jaccard_on_chain() {
        let ontology = chain_ontology();
        let a = ontology.term(term(2)).unwrap();
        let c = ontology.term(term(4)).unwrap();

        // anc(a) = {1,2}, anc(c) = {1,2,3,4}: 2 common of 4 total
        assert_eq!(Jaccard::default().calculate(&a, &c), 0.5);
    }

    #[test]
    fn jaccard_exact_value_on_diamond() {
        // anc(left) = {top, left}, anc(right) = {top, right}:
        // intersection {top}, union of 3
        let ontology = diamond_ontology();
        let left = ontology.term(term(2)).unwrap();
        let right = ontology.term(term(3)).unwrap();

        assert_eq!(Jaccard::default().calculate(&left, &right), 1.0 / 3.0);
    }

    #[test]
    fn jaccard_self_similarity_is_one() {
        let ontology = chain_ontology();
        let c = ontology.term(term(4)).unwrap();
        assert_eq!(Jaccard::default().calculate(&c, &c), 1.0);
    }

    #[test]
    fn strategies_are_symmetric() {
        let ontology = diamond_ontology();
        let genes = collection(vec![
            gene("P00001", "G1", &[2]),
            gene("P00002", "G2", &[3]),
        ]);
        let ic = crate::InformationContent::new(&ontology, &genes);

        let jaccard = Jaccard::default();
        let wupalmer = WuPalmer::new();
        let resnik = Resnik::new(&ic);

        for a in ontology.terms() {
            for b in ontology.terms() {
                assert_eq!(jaccard.calculate(&a, &b), jaccard.calculate(&b, &a));
                assert_eq!(wupalmer.calculate(&a, &b), wupalmer.calculate(&b, &a));
                assert_eq!(resnik.calculate(&a, &b), resnik.calculate(&b, &a));
            }
        }
    }

    #[test]
    fn wupalmer_on_chain() {
        let ontology = chain_ontology();
        let b = ontology.term(term(3)).unwrap();
        let c = ontology.term(term(4)).unwrap();

        // lca is b itself: depth 2, depths 2 + 3
        assert_eq!(WuPalmer::new().calculate(&b, &c), 4.0 / 5.0);
    }

    #[test]
    fn wupalmer_at_root_is_zero() {
        let ontology = diamond_ontology();
        let top = ontology.term(term(1)).unwrap();

        // both terms at depth 0, denominator 0
        assert_eq!(WuPalmer::new().calculate(&top, &top), 0.0);
    }

    #[test]
    fn wupalmer_is_bounded() {
        let ontology = diamond_ontology();
        for a in ontology.terms() {
            for b in ontology.terms() {
                let score = WuPalmer::new().calculate(&a, &b);
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }

    #[test]
    fn resnik_takes_max_ancestor_ic() {
        let ontology = chain_ontology();
        // 2 of 4 genes below b(3): ic(b) = -ln(0.5); root covers all: ic = 0
        let genes = collection(vec![
            gene("P00001", "G1", &[4]),
            gene("P00002", "G2", &[4]),
            gene("P00003", "G3", &[2]),
            gene("P00004", "G4", &[2]),
        ]);
        let ic = crate::InformationContent::new(&ontology, &genes);

        let b = ontology.term(term(3)).unwrap();
        let c = ontology.term(term(4)).unwrap();
        let expected = -(0.5f32).ln();
        assert!((Resnik::new(&ic).calculate(&b, &c) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn resnik_tolerates_missing_ic() {
        let ontology = chain_ontology();
        // nothing annotated: every common ancestor lacks an IC entry
        let ic = crate::InformationContent::new(&ontology, &collection(vec![]));

        let b = ontology.term(term(3)).unwrap();
        let c = ontology.term(term(4)).unwrap();
        assert_eq!(Resnik::new(&ic).calculate(&b, &c), 0.0);
    }

    #[test]
    fn builtins_dispatch() {
        let ontology = chain_ontology();
        let ic = crate::InformationContent::new(&ontology, &collection(vec![]));
        let a = ontology.term(term(2)).unwrap();
        let c = ontology.term(term(4)).unwrap();

        let jaccard = Builtins::from_name("jaccard", &ic).unwrap();
        assert_eq!(jaccard.calculate(&a, &c), 0.5);

        assert_eq!(
            Builtins::from_name("cosine", &ic).unwrap_err(),
            GoError::UnknownStrategy(String::from("cosine"))
        );
    }
}
