//! Top-level documentation sections

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the five top-level views of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Functional requirements
    #[default]
    Functional,
    /// Non-functional requirements
    NonFunctional,
    /// Actors and workflows
    UseCase,
    /// Architecture component catalog
    Component,
    /// Layered architecture overview
    Architecture,
}

impl Section {
    /// All sections in tab order
    pub const ALL: [Section; 5] = [
        Section::Functional,
        Section::NonFunctional,
        Section::UseCase,
        Section::Component,
        Section::Architecture,
    ];

    /// Stable string identifier (kebab-case)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::NonFunctional => "non-functional",
            Self::UseCase => "use-case",
            Self::Component => "component",
            Self::Architecture => "architecture",
        }
    }

    /// Human readable tab title
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Functional => "Functional Requirements",
            Self::NonFunctional => "Non-Functional Requirements",
            Self::UseCase => "Use Cases",
            Self::Component => "Components",
            Self::Architecture => "Architecture",
        }
    }

    /// Position in [`Section::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Functional => 0,
            Self::NonFunctional => 1,
            Self::UseCase => 2,
            Self::Component => 3,
            Self::Architecture => 4,
        }
    }

    /// Section at tab position `index`, if any
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match on the kebab-case identifier; padded or differently cased
/// names are rejected.
impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_functional() {
        assert_eq!(Section::default(), Section::Functional);
    }

    #[test]
    fn parses_every_known_name() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "deployment".parse::<Section>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidSection(ref s) if s == "deployment"));
        assert!("Functional".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
        assert!(" component ".parse::<Section>().is_err());
        assert!("component\n".parse::<Section>().is_err());
    }

    #[test]
    fn index_round_trips() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(5), None);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Section::NonFunctional).unwrap();
        assert_eq!(json, "\"non-functional\"");
        let parsed: Section = serde_json::from_str("\"use-case\"").unwrap();
        assert_eq!(parsed, Section::UseCase);
    }
}
