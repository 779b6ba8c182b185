//! Shared synthetic ontologies and gene collections for unit tests

use crate::annotations::{Gene, GeneCollection};
use crate::ontology::Builder;
use crate::term::{GoTermId, Namespace};
use crate::Ontology;

pub(crate) fn term(n: u32) -> GoTermId {
    GoTermId::from(n)
}

/// `root(1) <- a(2) <- b(3) <- c(4)`, `is_a` edges only
pub(crate) fn chain_ontology() -> Ontology {
    let mut builder = Builder::new();
    builder.add_term("GO:0000001", "root", "biological_process").unwrap();
    builder.add_term("GO:0000002", "a", "biological_process").unwrap();
    builder.add_term("GO:0000003", "b", "biological_process").unwrap();
    builder.add_term("GO:0000004", "c", "biological_process").unwrap();
    builder.add_parent("GO:0000002", "GO:0000001", "is_a").unwrap();
    builder.add_parent("GO:0000003", "GO:0000002", "is_a").unwrap();
    builder.add_parent("GO:0000004", "GO:0000003", "is_a").unwrap();
    builder.build()
}

/// `top(1)` with children `left(2)` and `right(3)`, both parents of `bottom(4)`
pub(crate) fn diamond_ontology() -> Ontology {
    let mut builder = Builder::new();
    builder.add_term("GO:0000001", "top", "biological_process").unwrap();
    builder.add_term("GO:0000002", "left", "biological_process").unwrap();
    builder.add_term("GO:0000003", "right", "biological_process").unwrap();
    builder.add_term("GO:0000004", "bottom", "biological_process").unwrap();
    builder.add_parent("GO:0000002", "GO:0000001", "is_a").unwrap();
    builder.add_parent("GO:0000003", "GO:0000001", "is_a").unwrap();
    builder.add_parent("GO:0000004", "GO:0000002", "is_a").unwrap();
    builder.add_parent("GO:0000004", "GO:0000003", "is_a").unwrap();
    builder.build()
}

pub(crate) fn gene(id: &str, symbol: &str, term_ids: &[u32]) -> Gene {
    let mut gene = Gene::new(id.into(), symbol, symbol);
    for &n in term_ids {
        gene.add_annotation(
            term(n),
            "IDA".parse().unwrap(),
            Namespace::BiologicalProcess,
            "enables",
        );
    }
    gene
}

pub(crate) fn collection(genes: Vec<Gene>) -> GeneCollection {
    GeneCollection::new(genes)
}
