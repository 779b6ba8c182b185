use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::annotations::{Gene, GeneId};
use crate::term::{GoTermId, RelationFilter};
use crate::{GoError, GoResult, Ontology};

/// The collection of all genes with a reverse index from term to genes
///
/// Like the [`Ontology`](crate::Ontology), a `GeneCollection` is built once
/// from decoded records and is read-only afterwards. On construction it
/// derives the `term -> genes` reverse index from every valid (non-negated)
/// annotation, so "which genes are annotated to this term" is a direct
/// lookup.
#[derive(Debug, Default)]
pub struct GeneCollection {
    genes: HashMap<GeneId, Gene>,
    term_genes: HashMap<GoTermId, HashSet<GeneId>>,
}

/// Result of [`GeneCollection::annotation_status`]
#[derive(Debug)]
pub struct AnnotationStatus<'a> {
    /// The resolved gene
    pub gene: &'a Gene,
    /// The term the gene was checked against
    pub term_id: GoTermId,
    /// `true` if the gene is annotated to the term or any of its descendants
    pub is_annotated: bool,
    /// All other genes annotated within the same term family
    pub other_genes: Vec<&'a Gene>,
}

impl GeneCollection {
    /// Builds the collection and its reverse index from decoded genes
    pub fn new(genes: Vec<Gene>) -> Self {
        let mut collection = GeneCollection {
            genes: genes
                .into_iter()
                .map(|gene| (gene.id().clone(), gene))
                .collect(),
            term_genes: HashMap::new(),
        };
        for gene in collection.genes.values() {
            for term_id in gene.valid_term_ids() {
                collection
                    .term_genes
                    .entry(term_id)
                    .or_default()
                    .insert(gene.id().clone());
            }
        }
        debug!(
            "gene collection with {} genes covering {} terms",
            collection.genes.len(),
            collection.term_genes.len()
        );
        collection
    }

    /// Returns the gene with the given id, `None` if it does not exist
    pub fn gene(&self, id: &GeneId) -> Option<&Gene> {
        self.genes.get(id)
    }

    /// Number of genes in the collection
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the collection does not contain any genes
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Iterates all genes
    pub fn genes(&self) -> impl Iterator<Item = &Gene> {
        self.genes.values()
    }

    /// Finds a gene by exact id, falling back to the best [`GeneCollection::search`] hit
    pub fn find_gene(&self, query: &str) -> Option<&Gene> {
        self.gene(&GeneId::from(query))
            .or_else(|| self.search(query).into_iter().next())
    }

    /// Case-insensitive search over symbols, synonyms and names
    ///
    /// Matches are tiered: exact symbol, exact synonym, partial symbol,
    /// partial synonym, partial name. Each gene is placed in the first tier
    /// it qualifies for only, and tiers are concatenated in that order.
    pub fn search(&self, query: &str) -> Vec<&Gene> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut exact_symbol = Vec::new();
        let mut exact_synonym = Vec::new();
        let mut partial_symbol = Vec::new();
        let mut partial_synonym = Vec::new();
        let mut partial_name = Vec::new();

        for gene in self.genes.values() {
            let symbol = gene.symbol().to_lowercase();
            let name = gene.name().to_lowercase();
            let synonyms: Vec<String> =
                gene.synonyms().iter().map(|s| s.to_lowercase()).collect();

            if query == symbol {
                exact_symbol.push(gene);
            } else if synonyms.iter().any(|synonym| *synonym == query) {
                exact_synonym.push(gene);
            } else if symbol.contains(&query) {
                partial_symbol.push(gene);
            } else if synonyms.iter().any(|synonym| synonym.contains(&query)) {
                partial_synonym.push(gene);
            } else if name.contains(&query) {
                partial_name.push(gene);
            }
        }

        exact_symbol
            .into_iter()
            .chain(exact_synonym)
            .chain(partial_symbol)
            .chain(partial_synonym)
            .chain(partial_name)
            .collect()
    }

    /// All term ids with at least one valid gene annotation
    pub fn annotated_term_ids(&self) -> impl Iterator<Item = GoTermId> + '_ {
        self.term_genes.keys().copied()
    }

    /// The genes directly annotated to a term
    pub fn genes_for_term(&self, term_id: GoTermId) -> Vec<&Gene> {
        self.term_genes
            .get(&term_id)
            .map(|ids| {
                ids.iter()
                    .map(|id| &self.genes[id])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The distinct genes annotated to a term or any of its descendants
    ///
    /// Descendants are resolved through the ontology using `filter`. The
    /// result is sorted by gene symbol for deterministic output.
    pub fn genes_for_term_recursive(
        &self,
        term_id: GoTermId,
        ontology: &Ontology,
        filter: &RelationFilter,
    ) -> Vec<&Gene> {
        let mut ids: HashSet<&GeneId> = self
            .term_genes
            .get(&term_id)
            .map(|ids| ids.iter().collect())
            .unwrap_or_default();

        for descendant in ontology.descendant_ids(term_id, filter) {
            if let Some(genes) = self.term_genes.get(&descendant) {
                ids.extend(genes.iter());
            }
        }

        let mut genes: Vec<&Gene> = ids.into_iter().map(|id| &self.genes[id]).collect();
        genes.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        genes
    }

    /// Checks whether a gene is annotated to a term or any of its
    /// descendants (following every relation), reporting the other genes of
    /// the term family if it is
    ///
    /// # Errors
    ///
    /// [`GoError::GeneNotFound`] if the query does not resolve to a gene,
    /// [`GoError::DoesNotExist`] if the term id is unknown
    pub fn annotation_status<'a>(
        &'a self,
        gene_query: &str,
        term_id: GoTermId,
        ontology: &Ontology,
    ) -> GoResult<AnnotationStatus<'a>> {
        let gene = self
            .find_gene(gene_query)
            .ok_or_else(|| GoError::GeneNotFound(gene_query.to_string()))?;
        if ontology.term(term_id).is_none() {
            return Err(GoError::DoesNotExist);
        }

        let family = ontology.descendant_ids(term_id, &RelationFilter::Any);
        let is_annotated = gene
            .valid_term_ids()
            .iter()
            .any(|annotated| family.contains(annotated));

        let other_genes = if is_annotated {
            self.genes_for_term_recursive(term_id, ontology, &RelationFilter::Any)
                .into_iter()
                .filter(|other| other.id() != gene.id())
                .collect()
        } else {
            Vec::new()
        };

        Ok(AnnotationStatus {
            gene,
            term_id,
            is_annotated,
            other_genes,
        })
    }
}

impl FromIterator<Gene> for GeneCollection {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        GeneCollection::new(iter.into_iter().collect())
    }
}
