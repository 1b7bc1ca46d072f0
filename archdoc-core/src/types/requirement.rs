//! Requirement records

use serde::{Deserialize, Serialize};

use super::Section;

/// Requirement kind, matching the two requirement sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementKind {
    Functional,
    NonFunctional,
}

impl RequirementKind {
    /// The section that lists requirements of this kind
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Self::Functional => Section::Functional,
            Self::NonFunctional => Section::NonFunctional,
        }
    }

    /// Requirement kind shown by `section`, if it is a requirement section
    #[must_use]
    pub fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Functional => Some(Self::Functional),
            Section::NonFunctional => Some(Self::NonFunctional),
            _ => None,
        }
    }
}

/// `MoSCoW` priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Must,
    Should,
    Could,
}

impl Priority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Must => "MUST",
            Self::Should => "SHOULD",
            Self::Could => "COULD",
        }
    }
}

/// A single requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Requirement id, e.g. `FR-01`
    pub id: String,
    pub kind: RequirementKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Grouping label (e.g. `Security`, `Performance`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
