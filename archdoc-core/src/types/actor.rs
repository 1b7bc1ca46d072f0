//! Actor records

use serde::{Deserialize, Serialize};

use super::ActorKey;

/// Role-based participant of the use-case catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Actor key
    pub key: ActorKey,
    /// Display name
    pub name: String,
    /// Role description
    pub description: String,
    /// Icon reference (presentation decides how to draw it)
    #[serde(default)]
    pub icon: String,
    /// Use cases of this actor, in presentation order
    #[serde(default)]
    pub use_cases: Vec<String>,
}
