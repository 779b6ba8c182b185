use std::fmt::Display;
use std::str::FromStr;

use crate::GoError;

/// The GAF evidence code of an annotation
///
/// Evidence codes record how an annotation was established, from direct
/// experimental assays down to purely electronic inference.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum EvidenceCode {
    /// Inferred from Experiment
    EXP,
    /// Inferred from Direct Assay
    IDA,
    /// Inferred from Physical Interaction
    IPI,
    /// Inferred from Mutant Phenotype
    IMP,
    /// Inferred from Genetic Interaction
    IGI,
    /// Inferred from Expression Pattern
    IEP,
    /// Inferred from High Throughput Experiment
    HTP,
    /// Inferred from High Throughput Direct Assay
    HDA,
    /// Inferred from High Throughput Mutant Phenotype
    HMP,
    /// Inferred from High Throughput Genetic Interaction
    HGI,
    /// Inferred from High Throughput Expression Pattern
    HEP,
    /// Inferred from Biological aspect of Ancestor
    IBA,
    /// Inferred from Biological aspect of Descendant
    IBD,
    /// Inferred from Key Residues
    IKR,
    /// Inferred from Rapid Divergence
    IRD,
    /// Inferred from Electronic Annotation
    IEA,
    /// Inferred from Sequence or structural Similarity
    ISS,
    /// Inferred from Sequence Orthology
    ISO,
    /// Inferred from Sequence Alignment
    ISA,
    /// Inferred from Sequence Model
    ISM,
    /// Inferred from Genomic Context
    IGC,
    /// Inferred from Reviewed Computational Analysis
    RCA,
    /// Traceable Author Statement
    TAS,
    /// Non-traceable Author Statement
    NAS,
    /// Inferred by Curator
    IC,
    /// No biological Data available
    ND,
}

impl EvidenceCode {
    /// A human readable description of the evidence code
    pub fn description(&self) -> &'static str {
        match self {
            EvidenceCode::EXP => "Experiment",
            EvidenceCode::IDA => "Direct Assay",
            EvidenceCode::IPI => "Physical Interaction",
            EvidenceCode::IMP => "Mutant Phenotype",
            EvidenceCode::IGI => "Genetic Interaction",
            EvidenceCode::IEP => "Expression Pattern",
            EvidenceCode::HTP => "High Throughput Experiment",
            EvidenceCode::HDA => "High Throughput Direct Assay",
            EvidenceCode::HMP => "High Throughput Mutant Phenotype",
            EvidenceCode::HGI => "High Throughput Genetic Interaction",
            EvidenceCode::HEP => "High Throughput Expression Pattern",
            EvidenceCode::IBA => "Biological aspect of Ancestor",
            EvidenceCode::IBD => "Biological aspect of Descendant",
            EvidenceCode::IKR => "Key Residues",
            EvidenceCode::IRD => "Rapid Divergence",
            EvidenceCode::IEA => "Electronic Annotation",
            EvidenceCode::ISS => "Sequence or structural Similarity",
            EvidenceCode::ISO => "Sequence Orthology",
            EvidenceCode::ISA => "Sequence Alignment",
            EvidenceCode::ISM => "Sequence Model",
            EvidenceCode::IGC => "Genomic Context",
            EvidenceCode::RCA => "Reviewed Computational Analysis",
            EvidenceCode::TAS => "Traceable Author Statement",
            EvidenceCode::NAS => "Non-traceable Author Statement",
            EvidenceCode::IC => "Inferred by Curator",
            EvidenceCode::ND => "No biological Data available",
        }
    }

    /// The three-letter (two for `IC`/`ND`) code as used in GAF files
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceCode::EXP => "EXP",
            EvidenceCode::IDA => "IDA",
            EvidenceCode::IPI => "IPI",
            EvidenceCode::IMP => "IMP",
            EvidenceCode::IGI => "IGI",
            EvidenceCode::IEP => "IEP",
            EvidenceCode::HTP => "HTP",
            EvidenceCode::HDA => "HDA",
            EvidenceCode::HMP => "HMP",
            EvidenceCode::HGI => "HGI",
            EvidenceCode::HEP => "HEP",
            EvidenceCode::IBA => "IBA",
            EvidenceCode::IBD => "IBD",
            EvidenceCode::IKR => "IKR",
            EvidenceCode::IRD => "IRD",
            EvidenceCode::IEA => "IEA",
            EvidenceCode::ISS => "ISS",
            EvidenceCode::ISO => "ISO",
            EvidenceCode::ISA => "ISA",
            EvidenceCode::ISM => "ISM",
            EvidenceCode::IGC => "IGC",
            EvidenceCode::RCA => "RCA",
            EvidenceCode::TAS => "TAS",
            EvidenceCode::NAS => "NAS",
            EvidenceCode::IC => "IC",
            EvidenceCode::ND => "ND",
        }
    }
}

impl FromStr for EvidenceCode {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXP" => Ok(EvidenceCode::EXP),
            "IDA" => Ok(EvidenceCode::IDA),
            "IPI" => Ok(EvidenceCode::IPI),
            "IMP" => Ok(EvidenceCode::IMP),
            "IGI" => Ok(EvidenceCode::IGI),
            "IEP" => Ok(EvidenceCode::IEP),
            "HTP" => Ok(EvidenceCode::HTP),
            "HDA" => Ok(EvidenceCode::HDA),
            "HMP" => Ok(EvidenceCode::HMP),
            "HGI" => Ok(EvidenceCode::HGI),
            "HEP" => Ok(EvidenceCode::HEP),
            "IBA" => Ok(EvidenceCode::IBA),
            "IBD" => Ok(EvidenceCode::IBD),
            "IKR" => Ok(EvidenceCode::IKR),
            "IRD" => Ok(EvidenceCode::IRD),
            "IEA" => Ok(EvidenceCode::IEA),
            "ISS" => Ok(EvidenceCode::ISS),
            "ISO" => Ok(EvidenceCode::ISO),
            "ISA" => Ok(EvidenceCode::ISA),
            "ISM" => Ok(EvidenceCode::ISM),
            "IGC" => Ok(EvidenceCode::IGC),
            "RCA" => Ok(EvidenceCode::RCA),
            "TAS" => Ok(EvidenceCode::TAS),
            "NAS" => Ok(EvidenceCode::NAS),
            "IC" => Ok(EvidenceCode::IC),
            "ND" => Ok(EvidenceCode::ND),
            _ => Err(GoError::UnknownEvidenceCode(s.to_string())),
        }
    }
}

impl Display for EvidenceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
