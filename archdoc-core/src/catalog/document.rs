//! Serialized catalog form

use serde::{Deserialize, Serialize};

use crate::types::{Actor, ArchitectureLayer, ComponentDetail, Requirement, Workflow};

/// On-disk (JSON) form of a catalog
///
/// Collections are plain lists so the file order is the presentation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub components: Vec<ComponentDetail>,
    #[serde(default)]
    pub layers: Vec<ArchitectureLayer>,
}
