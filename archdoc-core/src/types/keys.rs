//! Validated catalog keys
//!
//! Keys are stable string identifiers. A key is valid as soon as it is
//! non-blank; whether the catalog actually contains it is decided on lookup.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

macro_rules! catalog_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Build a key, trimming surrounding whitespace. Blank input is rejected.
            pub fn new(raw: impl Into<String>) -> CoreResult<Self> {
                let raw = raw.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::InvalidKey(raw));
                }
                Ok(Self(trimmed.to_string()))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = CoreError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

catalog_key!(
    /// Architecture component identifier (e.g. `openai`)
    ComponentKey
);

catalog_key!(
    /// Actor identifier (e.g. `requester`)
    ActorKey
);

catalog_key!(
    /// Workflow identifier (e.g. `access-request`)
    WorkflowKey
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let key = ComponentKey::new("  openai ").unwrap();
        assert_eq!(key.as_str(), "openai");
        assert_eq!(key, "openai");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(ActorKey::new(""), Err(CoreError::InvalidKey(_))));
        assert!(matches!(WorkflowKey::new("   "), Err(CoreError::InvalidKey(_))));
    }

    #[test]
    fn deserialization_validates() {
        let ok: ComponentKey = serde_json::from_str("\"key-vault\"").unwrap();
        assert_eq!(ok.as_str(), "key-vault");
        assert!(serde_json::from_str::<ComponentKey>("\"  \"").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = WorkflowKey::new("access-request").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"access-request\"");
    }
}
