//! Similarity scores between two terms or between two annotated genes

use crate::term::GoTerm;
use crate::{GoError, GoResult, InformationContent};

mod defaults;
mod genes;

pub use defaults::{Jaccard, Resnik, WuPalmer};
pub use genes::{GeneComparison, GeneSimilarity, TermMatch};

/// Trait for similarity score calculation between two [`GoTerm`]s
///
/// All built-in implementations are pure and symmetric in their arguments.
pub trait Similarity {
    /// Calculates the similarity between term `a` and term `b`
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32;
}

/// The built-in similarity algorithms behind a single type
///
/// Useful when the algorithm is selected at runtime, e.g. from a request
/// parameter.
///
/// # Examples
///
/// ```
/// use gosim::similarity::Builtins;
/// use gosim::InformationContent;
///
/// let ic = InformationContent::default();
/// assert!(Builtins::from_name("wupalmer", &ic).is_ok());
/// assert!(Builtins::from_name("cosine", &ic).is_err());
/// ```
#[derive(Debug)]
pub enum Builtins<'a> {
    /// Ancestor-set overlap, see [`Jaccard`]
    Jaccard(Jaccard),
    /// Depth of the deepest common ancestor, see [`WuPalmer`]
    WuPalmer(WuPalmer),
    /// Information content of the common ancestors, see [`Resnik`]
    Resnik(Resnik<'a>),
}

impl<'a> Builtins<'a> {
    /// Resolves a strategy by its lowercase name:
    /// `jaccard`, `wupalmer` or `resnik`
    ///
    /// # Errors
    ///
    /// [`GoError::UnknownStrategy`] for any other name
    pub fn from_name(name: &str, ic: &'a InformationContent) -> GoResult<Self> {
        match name {
            "jaccard" => Ok(Builtins::Jaccard(Jaccard::default())),
            "wupalmer" => Ok(Builtins::WuPalmer(WuPalmer::default())),
            "resnik" => Ok(Builtins::Resnik(Resnik::new(ic))),
            _ => Err(GoError::UnknownStrategy(name.to_string())),
        }
    }
}

impl Similarity for Builtins<'_> {
    fn calculate(&self, a: &GoTerm, b: &GoTerm) -> f32 {
        match self {
            Builtins::Jaccard(jaccard) => jaccard.calculate(a, b),
            Builtins::WuPalmer(wupalmer) => wupalmer.calculate(a, b),
            Builtins::Resnik(resnik) => resnik.calculate(a, b),
        }
    }
}

/// Converts set sizes to `f32` for score arithmetic, crashing loudly
/// instead of silently losing precision on absurdly large sets
fn usize_to_f32(n: usize) -> f32 {
    <usize as TryInto<u16>>::try_into(n)
        .expect("set too large for score arithmetic")
        .into()
}
