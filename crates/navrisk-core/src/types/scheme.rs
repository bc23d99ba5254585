//! Scheme identity.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a mutual fund scheme (e.g. `"120503"`).
///
/// Feeds publish codes either as JSON numbers or strings; both deserialize
/// to the same textual code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SchemeCode(String);

impl SchemeCode {
    /// Creates a scheme code, trimming surrounding whitespace.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the code is purely numeric, the shape of registered scheme codes.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemeCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SchemeCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for SchemeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => SchemeCode(n.to_string()),
            Raw::Text(s) => SchemeCode::new(s),
        })
    }
}

/// A scheme as listed by a search directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeInfo {
    /// Scheme identifier.
    #[serde(alias = "schemeCode")]
    pub scheme_code: SchemeCode,
    /// Display name, which carries the plan type (Growth / IDCW).
    #[serde(alias = "schemeName")]
    pub scheme_name: String,
}

impl SchemeInfo {
    /// Creates a scheme listing.
    #[must_use]
    pub fn new(scheme_code: impl Into<SchemeCode>, scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_code: scheme_code.into(),
            scheme_name: scheme_name.into(),
        }
    }
}
