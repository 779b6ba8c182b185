use std::fmt::Display;
use std::str::FromStr;

use crate::GoError;

/// The three top-level branches of the Gene Ontology
///
/// Every term belongs to exactly one namespace. The same three categories
/// appear as the single-letter aspect column of GAF annotation records.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Namespace {
    /// `biological_process`, aspect `P`
    BiologicalProcess,
    /// `molecular_function`, aspect `F`
    MolecularFunction,
    /// `cellular_component`, aspect `C`
    CellularComponent,
}

impl Namespace {
    /// Parses the single-letter GAF aspect code
    pub fn from_aspect(aspect: char) -> Option<Self> {
        match aspect {
            'P' => Some(Namespace::BiologicalProcess),
            'F' => Some(Namespace::MolecularFunction),
            'C' => Some(Namespace::CellularComponent),
            _ => None,
        }
    }
}

impl FromStr for Namespace {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "biological_process" => Ok(Namespace::BiologicalProcess),
            "molecular_function" => Ok(Namespace::MolecularFunction),
            "cellular_component" => Ok(Namespace::CellularComponent),
            _ => Err(GoError::UnknownNamespace(s.to_string())),
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Namespace::BiologicalProcess => "Biological Process",
            Namespace::MolecularFunction => "Molecular Function",
            Namespace::CellularComponent => "Cellular Component",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_namespace() {
        assert_eq!(
            "biological_process".parse::<Namespace>().unwrap(),
            Namespace::BiologicalProcess
        );
        assert!("biological process".parse::<Namespace>().is_err());
    }

    #[test]
    fn aspect_codes() {
        assert_eq!(Namespace::from_aspect('F'), Some(Namespace::MolecularFunction));
        assert_eq!(Namespace::from_aspect('X'), None);
    }

    #[test]
    fn display_title_case() {
        assert_eq!(Namespace::CellularComponent.to_string(), "Cellular Component");
    }
}
