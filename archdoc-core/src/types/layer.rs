//! Architecture layer records

use serde::{Deserialize, Serialize};

use super::ComponentKey;

/// A horizontal slice of the architecture overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureLayer {
    /// Layer key
    pub key: String,
    pub name: String,
    pub description: String,
    /// Components placed on this layer, top to bottom
    #[serde(default)]
    pub components: Vec<ComponentKey>,
}
