// crates/boundary-core/src/geocode.rs
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator used by compound geocodes such as `"610604;610607"`.
pub const COMPOUND_SEPARATOR: char = ';';

/// Placeholder character of wildcard geocodes such as `"10__"`.
pub const WILDCARD_PLACEHOLDER: char = '_';

/// Identifier of a geographic area as understood by the map engine.
///
/// A geocode is an opaque key: the manager only compares it and forwards it
/// verbatim to the engine. It can name a single area (`"610604"`), a list of
/// areas (`"610604;610607"`) or every child of a prefix (`"10__"`).
///
/// The helpers below are for display and reporting only.
///
/// ```rust
/// use boundary_core::Geocode;
///
/// let g = Geocode::from("610604;610607");
/// assert!(g.is_compound());
/// assert_eq!(g.parts().collect::<Vec<_>>(), ["610604", "610607"]);
/// assert!(Geocode::from("10__").is_wildcard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geocode(String);

impl Geocode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// `true` when the geocode lists more than one area.
    pub fn is_compound(&self) -> bool {
        self.0.contains(COMPOUND_SEPARATOR)
    }

    /// `true` when the geocode ends in placeholder characters.
    pub fn is_wildcard(&self) -> bool {
        self.0
            .split(COMPOUND_SEPARATOR)
            .any(|part| part.trim().ends_with(WILDCARD_PLACEHOLDER))
    }

    /// Individual area codes of a compound geocode, empty segments skipped.
    pub fn parts(&self) -> impl Iterator<Item = &str> + '_ {
        self.0
            .split(COMPOUND_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

impl fmt::Display for Geocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Geocode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Geocode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Geocode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Geocode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
