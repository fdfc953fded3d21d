//! Typed identifier for provider records.
//!
//! Provider identifiers arrive as opaque strings from the record source. The
//! wrapper keeps them from being mixed up with emails, postcodes and the other
//! string fields a record carries.
//!
//! # Example
//!
//! ```rust
//! use provider_view::ProviderId;
//!
//! let id = ProviderId::from("sp-001");
//! assert_eq!(id.as_str(), "sp-001");
//! assert_eq!(id.to_string(), "sp-001");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        ProviderId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProviderId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProviderId(s.to_string()))
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        ProviderId(s.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        ProviderId(s)
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProviderId::from("sp-042");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sp-042\"");

        let back: ProviderId = serde_json::from_str("\"sp-042\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_orders_like_the_underlying_string() {
        let mut ids = vec![ProviderId::from("b"), ProviderId::from("a")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "a");
    }
}
