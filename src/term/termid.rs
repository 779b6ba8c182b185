use core::fmt::Debug;
use std::fmt::Display;

use crate::{GoError, GoResult, MAX_GO_ID_INTEGER};

/// The unique identifier of a GO term, e.g. `GO:0008150`
///
/// Internally stored as the numerical part of the id, so it is cheap to
/// copy, hash and compare. The canonical `GO:xxxxxxx` representation is
/// produced by the `Display` impl.
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GoTermId {
    inner: u32,
}

impl GoTermId {
    /// Returns the numerical part of the id
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for GoTermId {
    type Error = GoError;

    /// Parses a `GO:0008150`-style id, the `GO:` prefix is optional
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidTermId`] if the numerical part is not a number
    /// or too large for a 7-digit GO id
    fn try_from(s: &str) -> GoResult<Self> {
        let digits = s.strip_prefix("GO:").unwrap_or(s);
        let inner = digits
            .parse::<u32>()
            .map_err(|_| GoError::InvalidTermId(s.to_string()))?;
        if inner >= MAX_GO_ID_INTEGER {
            return Err(GoError::InvalidTermId(s.to_string()));
        }
        Ok(GoTermId { inner })
    }
}

impl From<u32> for GoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTermId({self})")
    }
}

impl Display for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GO:{:07}", self.inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_with_prefix() {
        let id = GoTermId::try_from("GO:0008150").unwrap();
        assert_eq!(id.as_u32(), 8150);
        assert_eq!(id.to_string(), "GO:0008150");
    }

    #[test]
    fn parse_without_prefix() {
        let id = GoTermId::try_from("0051716").unwrap();
        assert_eq!(id, GoTermId::from(51716u32));
    }

    #[test]
    fn reject_invalid() {
        assert!(GoTermId::try_from("GO:abc").is_err());
        assert!(GoTermId::try_from("").is_err());
        assert!(GoTermId::try_from("GO:10000000").is_err());
    }

    #[test]
    fn display_pads_to_seven_digits() {
        assert_eq!(GoTermId::from(1u32).to_string(), "GO:0000001");
    }
}
