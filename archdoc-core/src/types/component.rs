//! Architecture component records

use serde::{Deserialize, Serialize};

use super::ComponentKey;

/// Detail record of a single architecture component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    /// Component key
    pub key: ComponentKey,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Integration facts, in presentation order
    #[serde(default)]
    pub integrations: Vec<String>,
    /// Data-flow facts, in presentation order
    #[serde(default)]
    pub data_flow: Vec<String>,
    /// Configuration notes grouped by category
    #[serde(default)]
    pub configuration: ComponentConfiguration,
}

/// Configuration notes of a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfiguration {
    #[serde(default)]
    pub environment: Vec<String>,
    #[serde(default)]
    pub security: Vec<String>,
    #[serde(default)]
    pub monitoring: Vec<String>,
}

/// Configuration category of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCategory {
    Environment,
    Security,
    Monitoring,
}

impl ConfigCategory {
    /// All categories in display order
    pub const ALL: [ConfigCategory; 3] = [
        ConfigCategory::Environment,
        ConfigCategory::Security,
        ConfigCategory::Monitoring,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Environment => "Environment",
            Self::Security => "Security",
            Self::Monitoring => "Monitoring",
        }
    }
}

impl ComponentConfiguration {
    /// Entries of one category
    #[must_use]
    pub fn entries(&self, category: ConfigCategory) -> &[String] {
        match category {
            ConfigCategory::Environment => &self.environment,
            ConfigCategory::Security => &self.security,
            ConfigCategory::Monitoring => &self.monitoring,
        }
    }

    /// Whether every category is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.environment.is_empty() && self.security.is_empty() && self.monitoring.is_empty()
    }
}
