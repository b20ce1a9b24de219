//! The provider-assigned stream format identifier.
//!
//! A [`FormatCode`] is an opaque string handed to us by the remote provider
//! and unique within one media item's catalog. Wrapping it in a newtype
//! keeps it from being confused with other strings (resolution labels,
//! media keys) at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, provider-assigned identifier for one stream format.
///
/// Codes compare lexicographically; the resolution engine uses that ordering
/// as its final deterministic tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatCode(String);

impl FormatCode {
    /// Wrap a provider-reported code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Return the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FormatCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl From<String> for FormatCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for FormatCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        // Provider codes are opaque strings, not numbers: "100" sorts
        // before "99".
        assert!(FormatCode::from("100") < FormatCode::from("99"));
        assert!(FormatCode::from("18") < FormatCode::from("22"));
    }

    #[test]
    fn serde_is_transparent() {
        let code = FormatCode::from("251");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#""251""#);
        let back: FormatCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(FormatCode::from("137").to_string(), "137");
        assert_eq!(FormatCode::new("137").as_str(), "137");
    }
}
