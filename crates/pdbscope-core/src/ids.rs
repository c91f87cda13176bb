//! Structure identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// A PDB identifier as typed into the side panel.
///
/// Only surrounding whitespace is removed. The text is otherwise forwarded
/// as-is; the RCSB services decide whether it names a real entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PdbId(String);

impl PdbId {
    /// Parses raw input, returning `None` when nothing is left after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdbscope_core::PdbId;
    ///
    /// let id = PdbId::parse("  1ubq \n").unwrap();
    /// assert_eq!(id.as_str(), "1ubq");
    /// assert!(PdbId::parse("   ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PdbId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or(Error::EmptyIdentifier)
    }
}

impl TryFrom<String> for PdbId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PdbId> for String {
    fn from(id: PdbId) -> Self {
        id.0
    }
}

impl AsRef<str> for PdbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
