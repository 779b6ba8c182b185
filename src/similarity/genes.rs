use std::collections::HashMap;

use rayon::prelude::*;

use crate::annotations::Gene;
use crate::matrix::SimilarityMatrix;
use crate::similarity::Similarity;
use crate::term::GoTermId;
use crate::{Ontology, NUM_TOP_MATCHES};

/// Placeholder name for a term id that is not part of the ontology
const MISSING_NAME: &str = "N/A";

/// One term pair contributing to a gene-gene similarity score
#[derive(Clone, Debug, PartialEq)]
pub struct TermMatch {
    /// First term of the pair
    pub term_a: GoTermId,
    /// Display name of the first term, `"N/A"` if unknown
    pub term_a_name: String,
    /// Second term of the pair
    pub term_b: GoTermId,
    /// Display name of the second term, `"N/A"` if unknown
    pub term_b_name: String,
    /// The term-term similarity score
    pub score: f32,
}

/// The result of comparing two genes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneComparison {
    /// The symmetrized average-best-match score
    pub score: f32,
    /// The five highest-scoring pairs of distinct terms
    pub top_matches: Vec<TermMatch>,
}

/// Aggregates term-level similarity scores into gene-level scores
///
/// Two annotation sets are compared by *best-match averaging*: for every
/// term of one gene the best score against any term of the other gene is
/// taken, those maxima are averaged, and the two directions (which are
/// generally asymmetric) are averaged again into one symmetric score.
///
/// # Examples
///
/// ```
/// use gosim::annotations::Gene;
/// use gosim::ontology::Builder;
/// use gosim::similarity::{GeneSimilarity, Jaccard};
/// use gosim::Namespace;
///
/// let mut builder = Builder::new();
/// builder.add_term("GO:0000001", "root", "biological_process").unwrap();
/// builder.add_term("GO:0000002", "child", "biological_process").unwrap();
/// builder.add_parent("GO:0000002", "GO:0000001", "is_a").unwrap();
/// let ontology = builder.build();
///
/// let mut gene_a = Gene::new("P00001".into(), "A", "gene a");
/// gene_a.add_annotation(1u32.into(), "IDA".parse().unwrap(), Namespace::BiologicalProcess, "enables");
/// let mut gene_b = Gene::new("P00002".into(), "B", "gene b");
/// gene_b.add_annotation(2u32.into(), "IDA".parse().unwrap(), Namespace::BiologicalProcess, "enables");
///
/// let comparison = GeneSimilarity::new(Jaccard::default(), &ontology).compare(&gene_a, &gene_b);
/// assert_eq!(comparison.score, 0.5);
/// ```
pub struct GeneSimilarity<'a, S> {
    similarity: S,
    ontology: &'a Ontology,
}

impl<'a, S: Similarity> GeneSimilarity<'a, S> {
    /// Constructs a gene-level calculator on top of a term-level strategy
    pub fn new(similarity: S, ontology: &'a Ontology) -> Self {
        Self {
            similarity,
            ontology,
        }
    }

    /// Compares two genes by their valid (non-negated) annotations
    ///
    /// If either gene has no valid annotation the score is `0.0` with an
    /// empty match list. Every unordered term pair is scored exactly once,
    /// even when it occurs in both directions.
    pub fn compare(&self, gene_a: &Gene, gene_b: &Gene) -> GeneComparison {
        let terms_a = gene_a.valid_term_ids();
        let terms_b = gene_b.valid_term_ids();
        if terms_a.is_empty() || terms_b.is_empty() {
            return GeneComparison::default();
        }

        let scores = self.precompute_scores(&terms_a, &terms_b);

        let score_ab = Self::avg_best_match(&terms_a, &terms_b, &scores);
        let score_ba = Self::avg_best_match(&terms_b, &terms_a, &scores);

        GeneComparison {
            score: (score_ab + score_ba) / 2.0,
            top_matches: self.top_matches(&scores),
        }
    }

    /// An N×N similarity matrix over the given genes
    ///
    /// The diagonal is fixed to `1.0` by convention (self-similarity is
    /// maximal, not recomputed through the strategy). Each off-diagonal
    /// cell is the [`GeneSimilarity::compare`] score of an unordered gene
    /// pair, mirrored across the diagonal. Cells are independent given the
    /// immutable ontology and are computed in parallel.
    pub fn matrix(&self, genes: &[&Gene]) -> SimilarityMatrix
    where
        S: Sync,
    {
        let n = genes.len();
        let labels = genes.iter().map(|gene| gene.symbol().to_string()).collect();

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let cells: Vec<((usize, usize), f32)> = pairs
            .into_par_iter()
            .map(|(i, j)| ((i, j), self.compare(genes[i], genes[j]).score))
            .collect();

        let mut values = vec![0.0; n * n];
        for i in 0..n {
            values[i * n + i] = 1.0;
        }
        for ((i, j), score) in cells {
            values[i * n + j] = score;
            values[j * n + i] = score;
        }

        SimilarityMatrix::new(labels, values)
    }

    fn pair_key(a: GoTermId, b: GoTermId) -> (GoTermId, GoTermId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Scores every unordered pair of `terms_a` × `terms_b` once
    ///
    /// A term id missing from the ontology scores `0.0` against anything,
    /// in line with the tolerant-lookup policy.
    fn precompute_scores(
        &self,
        terms_a: &[GoTermId],
        terms_b: &[GoTermId],
    ) -> HashMap<(GoTermId, GoTermId), f32> {
        let mut scores = HashMap::new();
        for &ta in terms_a {
            for &tb in terms_b {
                scores.entry(Self::pair_key(ta, tb)).or_insert_with(|| {
                    match (self.ontology.term(ta), self.ontology.term(tb)) {
                        (Some(a), Some(b)) => self.similarity.calculate(&a, &b),
                        _ => 0.0,
                    }
                });
            }
        }
        scores
    }

    /// The mean over `source` of each term's best score against `target`
    fn avg_best_match(
        source: &[GoTermId],
        target: &[GoTermId],
        scores: &HashMap<(GoTermId, GoTermId), f32>,
    ) -> f32 {
        let best_sum: f32 = source
            .iter()
            .map(|&s| {
                target
                    .iter()
                    .map(|&t| scores.get(&Self::pair_key(s, t)).copied().unwrap_or(0.0))
                    .fold(0.0, f32::max)
            })
            .sum();
        best_sum / source.len() as f32
    }

    /// The five highest-scoring pairs of distinct terms, annotated with
    /// their display names
    fn top_matches(&self, scores: &HashMap<(GoTermId, GoTermId), f32>) -> Vec<TermMatch> {
        let mut pairs: Vec<(&(GoTermId, GoTermId), &f32)> = scores
            .iter()
            .filter(|((t1, t2), _)| t1 != t2)
            .collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

        let name = |id: GoTermId| {
            self.ontology
                .term(id)
                .map_or_else(|| MISSING_NAME.to_string(), |term| term.name().to_string())
        };

        pairs
            .into_iter()
            .take(NUM_TOP_MATCHES)
            .map(|(&(term_a, term_b), &score)| TermMatch {
                term_a,
                term_a_name: name(term_a),
                term_b,
                term_b_name: name(term_b),
                score,
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::similarity::Jaccard;
    use crate::test_fixtures::{chain_ontology, diamond_ontology, gene};

    #[test]
    fn identical_annotation_sets() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[4]);
        let b = gene("P00002", "B", &[4]);

        let comparison = calculator.compare(&a, &b);
        assert_eq!(comparison.score, 1.0);
        // the only scored pair is (4, 4), which is identical and filtered
        assert!(comparison.top_matches.is_empty());
    }

    #[test]
    fn unannotated_gene_scores_zero() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[4]);
        let empty = gene("P00002", "B", &[]);

        let comparison = calculator.compare(&a, &empty);
        assert_eq!(comparison.score, 0.0);
        assert!(comparison.top_matches.is_empty());
    }

    #[test]
    fn best_match_averaging() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        // jaccard(2,4) = 0.5, jaccard(3,4) = 0.75, jaccard(4,4) = 1.0
        let a = gene("P00001", "A", &[2, 4]);
        let b = gene("P00002", "B", &[4]);

        // A->B: mean(0.5, 1.0) = 0.75; B->A: max(0.5, 1.0) = 1.0
        let comparison = calculator.compare(&a, &b);
        assert_eq!(comparison.score, (0.75 + 1.0) / 2.0);
    }

    #[test]
    fn comparison_is_symmetric() {
        let ontology = diamond_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[2, 4]);
        let b = gene("P00002", "B", &[3]);

        assert_eq!(
            calculator.compare(&a, &b).score,
            calculator.compare(&b, &a).score
        );
    }

    #[test]
    fn top_matches_exclude_identical_pairs() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[3, 4]);
        let b = gene("P00002", "B", &[4]);

        let comparison = calculator.compare(&a, &b);
        assert_eq!(comparison.top_matches.len(), 1);
        let best = &comparison.top_matches[0];
        assert_ne!(best.term_a, best.term_b);
        assert_eq!(best.score, 0.75);
        assert_eq!(best.term_a_name, "b");
        assert_eq!(best.term_b_name, "c");
    }

    #[test]
    fn top_matches_name_placeholder_for_unknown_terms() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        // term 99 is not part of the ontology
        let a = gene("P00001", "A", &[99]);
        let b = gene("P00002", "B", &[4]);

        let comparison = calculator.compare(&a, &b);
        assert_eq!(comparison.score, 0.0);
        assert_eq!(comparison.top_matches.len(), 1);
        // the pair key is ordered, the unknown id 99 ends up as term_b
        assert_eq!(comparison.top_matches[0].term_a_name, "c");
        assert_eq!(comparison.top_matches[0].term_b_name, MISSING_NAME);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let ontology = diamond_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[2]);
        let b = gene("P00002", "B", &[3]);
        let c = gene("P00003", "C", &[4]);

        let matrix = calculator.matrix(&[&a, &b, &c]);
        assert_eq!(matrix.dim(), 3);
        assert!(matrix.is_symmetric());
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 1.0);
        }
        assert_eq!(matrix.labels(), ["A", "B", "C"]);
    }

    #[test]
    fn matrix_of_single_gene() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[4]);
        let matrix = calculator.matrix(&[&a]);
        assert_eq!(matrix.dim(), 1);
        assert_eq!(matrix.get(0, 0), 1.0);
    }

    #[test]
    fn matrix_of_identical_annotation_sets() {
        let ontology = chain_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[3, 4]);
        let b = gene("P00002", "B", &[3, 4]);
        let c = gene("P00003", "C", &[3, 4]);

        // identical sets score like self-similarity: 1.0 under jaccard
        let matrix = calculator.matrix(&[&a, &b, &c]);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), 1.0);
            }
        }
    }

    #[test]
    fn matrix_cells_match_pairwise_comparison() {
        let ontology = diamond_ontology();
        let calculator = GeneSimilarity::new(Jaccard::default(), &ontology);

        let a = gene("P00001", "A", &[2, 3]);
        let b = gene("P00002", "B", &[4]);

        let matrix = calculator.matrix(&[&a, &b]);
        assert_eq!(matrix.get(0, 1), calculator.compare(&a, &b).score);
    }
}
