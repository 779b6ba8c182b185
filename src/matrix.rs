//! The gene-to-gene similarity matrix
//!
//! A [`SimilarityMatrix`] is produced by
//! [`GeneSimilarity::matrix`](crate::similarity::GeneSimilarity::matrix):
//! a square, symmetric matrix of pairwise gene scores with a unit diagonal,
//! stored row-major together with one gene-symbol label per row/column.

/// A square, symmetric matrix of gene-gene similarity scores
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    pub(crate) fn new(labels: Vec<String>, values: Vec<f32>) -> Self {
        debug_assert_eq!(labels.len() * labels.len(), values.len());
        SimilarityMatrix { labels, values }
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The gene symbol of each row/column, in matrix order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The score at row `i`, column `j`
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.dim() && j < self.dim(), "matrix index out of bounds");
        self.values[i * self.dim() + j]
    }

    /// Iterates one row of scores
    pub fn row(&self, i: usize) -> impl Iterator<Item = f32> + '_ {
        let n = self.dim();
        self.values[i * n..(i + 1) * n].iter().copied()
    }

    /// Returns `true` if every cell mirrors its counterpart
    pub fn is_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| (0..n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// The best-scoring pair of distinct genes: `(label_i, label_j, score)`
    ///
    /// `None` for matrices with fewer than two rows.
    pub fn best_pair(&self) -> Option<(&str, &str, f32)> {
        let n = self.dim();
        let mut best: Option<(usize, usize, f32)> = None;
        for i in 0..n {
            for j in i + 1..n {
                let score = self.get(i, j);
                if best.map_or(true, |(_, _, max)| score > max) {
                    best = Some((i, j, score));
                }
            }
        }
        best.map(|(i, j, score)| (self.labels[i].as_str(), self.labels[j].as_str(), score))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn matrix() -> SimilarityMatrix {
        SimilarityMatrix::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![1.0, 0.5, 0.2, 0.5, 1.0, 0.8, 0.2, 0.8, 1.0],
        )
    }

    #[test]
    fn indexed_access() {
        let m = matrix();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.get(0, 1), 0.5);
        assert_eq!(m.get(2, 1), 0.8);
    }

    #[test]
    fn rows() {
        let m = matrix();
        let row: Vec<f32> = m.row(1).collect();
        assert_eq!(row, vec![0.5, 1.0, 0.8]);
    }

    #[test]
    fn symmetry_check() {
        assert!(matrix().is_symmetric());

        let skewed = SimilarityMatrix::new(
            vec!["A".into(), "B".into()],
            vec![1.0, 0.1, 0.2, 1.0],
        );
        assert!(!skewed.is_symmetric());
    }

    #[test]
    fn best_pair_ignores_diagonal() {
        let matrix = matrix();
        let (a, b, score) = matrix.best_pair().unwrap();
        assert_eq!((a, b), ("B", "C"));
        assert_eq!(score, 0.8);
    }

    #[test]
    fn best_pair_of_single_row() {
        let single = SimilarityMatrix::new(vec!["A".into()], vec![1.0]);
        assert!(single.best_pair().is_none());
    }
}
