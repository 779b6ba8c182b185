use std::fmt::Display;
use std::hash::Hash;

use crate::annotations::EvidenceCode;
use crate::term::{GoTermId, Namespace};

/// The unique identifier of a [`Gene`]
///
/// Gene accessions are not numeric (e.g. UniProt `P04637`), so the id wraps
/// the accession string as-is.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GeneId {
    inner: String,
}

impl GeneId {
    /// The raw accession string
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for GeneId {
    fn from(value: &str) -> Self {
        GeneId {
            inner: value.to_string(),
        }
    }
}

impl From<String> for GeneId {
    fn from(inner: String) -> Self {
        GeneId { inner }
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

/// One aggregated annotation record of a gene
///
/// A gene is annotated to a GO term with an evidence code, the GO aspect
/// and a qualifier (e.g. `enables`, `NOT|enables`). GAF rows sharing all
/// four of these collapse into a single record with an occurrence `count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    term_id: GoTermId,
    evidence: EvidenceCode,
    aspect: Namespace,
    qualifier: String,
    count: u32,
}

impl Annotation {
    /// The annotated GO term
    pub fn term_id(&self) -> GoTermId {
        self.term_id
    }

    /// The evidence code of the annotation
    pub fn evidence(&self) -> EvidenceCode {
        self.evidence
    }

    /// The GO aspect (namespace) of the annotated term
    pub fn aspect(&self) -> Namespace {
        self.aspect
    }

    /// The qualifier column, e.g. `enables` or `NOT|involved_in`
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Number of GAF rows aggregated into this record
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns `true` if the qualifier negates the annotation
    pub fn is_negated(&self) -> bool {
        self.qualifier.contains("NOT")
    }
}

/// A single gene with its aggregated GO annotations
///
/// # Examples
///
/// ```
/// use gosim::annotations::Gene;
/// use gosim::{GoTermId, Namespace};
///
/// let mut gene = Gene::new("P04637".into(), "TP53", "Cellular tumor antigen p53");
/// gene.add_annotation(
///     GoTermId::try_from("GO:0006915").unwrap(),
///     "IDA".parse().unwrap(),
///     Namespace::BiologicalProcess,
///     "involved_in",
/// );
/// assert_eq!(gene.annotations().len(), 1);
/// assert_eq!(gene.valid_term_ids().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Gene {
    id: GeneId,
    symbol: String,
    name: String,
    synonyms: Vec<String>,
    annotations: Vec<Annotation>,
}

impl Gene {
    /// Initializes a new gene without annotations
    pub fn new(id: GeneId, symbol: &str, name: &str) -> Gene {
        Gene {
            id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            synonyms: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// The unique [`GeneId`] of the gene
    pub fn id(&self) -> &GeneId {
        &self.id
    }

    /// The gene symbol, e.g. `TP53`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The full gene name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative symbols of the gene
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// Adds an alternative symbol
    pub fn add_synonym(&mut self, synonym: &str) {
        self.synonyms.push(synonym.to_string());
    }

    /// The aggregated annotation records
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Records one annotation row
    ///
    /// If a record with the same `(term, evidence, aspect, qualifier)` key
    /// exists already, its count is incremented instead of adding a
    /// duplicate.
    pub fn add_annotation(
        &mut self,
        term_id: GoTermId,
        evidence: EvidenceCode,
        aspect: Namespace,
        qualifier: &str,
    ) {
        let existing = self.annotations.iter_mut().find(|annotation| {
            annotation.term_id == term_id
                && annotation.evidence == evidence
                && annotation.aspect == aspect
                && annotation.qualifier == qualifier
        });
        match existing {
            Some(annotation) => annotation.count += 1,
            None => self.annotations.push(Annotation {
                term_id,
                evidence,
                aspect,
                qualifier: qualifier.to_string(),
                count: 1,
            }),
        }
    }

    /// The annotated term ids, excluding negated (`NOT`) annotations
    pub fn valid_term_ids(&self) -> Vec<GoTermId> {
        self.annotations
            .iter()
            .filter(|annotation| !annotation.is_negated())
            .map(Annotation::term_id)
            .collect()
    }

    /// Total number of GAF rows aggregated across all records
    pub fn total_annotation_count(&self) -> u32 {
        self.annotations.iter().map(Annotation::count).sum()
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gene {}

impl Hash for Gene {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn annotation_key() -> (GoTermId, EvidenceCode, Namespace) {
        (
            GoTermId::from(42u32),
            EvidenceCode::IDA,
            Namespace::BiologicalProcess,
        )
    }

    #[test]
    fn duplicate_annotations_are_aggregated() {
        let (term, evidence, aspect) = annotation_key();
        let mut gene = Gene::new("P00001".into(), "ABC1", "ABC one");

        gene.add_annotation(term, evidence, aspect, "enables");
        gene.add_annotation(term, evidence, aspect, "enables");
        assert_eq!(gene.annotations().len(), 1);
        assert_eq!(gene.annotations()[0].count(), 2);
        assert_eq!(gene.total_annotation_count(), 2);
    }

    #[test]
    fn differing_key_fields_stay_separate() {
        let (term, evidence, aspect) = annotation_key();
        let mut gene = Gene::new("P00001".into(), "ABC1", "ABC one");

        gene.add_annotation(term, evidence, aspect, "enables");
        gene.add_annotation(term, EvidenceCode::IEA, aspect, "enables");
        gene.add_annotation(term, evidence, aspect, "involved_in");
        assert_eq!(gene.annotations().len(), 3);
        assert_eq!(gene.total_annotation_count(), 3);
    }

    #[test]
    fn negated_annotations_are_not_valid() {
        let (term, evidence, aspect) = annotation_key();
        let mut gene = Gene::new("P00001".into(), "ABC1", "ABC one");

        gene.add_annotation(term, evidence, aspect, "NOT|enables");
        gene.add_annotation(GoTermId::from(43u32), evidence, aspect, "enables");

        assert_eq!(gene.annotations().len(), 2);
        assert_eq!(gene.valid_term_ids(), vec![GoTermId::from(43u32)]);
    }

    #[test]
    fn genes_compare_by_id() {
        let a = Gene::new("P00001".into(), "ABC1", "ABC one");
        let b = Gene::new("P00001".into(), "OTHER", "entirely different");
        assert_eq!(a, b);
    }
}
