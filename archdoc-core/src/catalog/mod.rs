//! Content catalog
//!
//! Immutable collection of the records the browser can show. Every
//! collection is keyed by a stable identifier and iterates in the order the
//! records were declared; nested sequences (integrations, use cases,
//! workflow steps, ...) keep their declared order too.

mod builtin;
mod document;

pub use builtin::{DEFAULT_ACTOR_KEY, DEFAULT_WORKFLOW_KEY};
pub use document::CatalogDocument;

use indexmap::IndexMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{
    Actor, ActorKey, ArchitectureLayer, ComponentDetail, ComponentKey, Requirement,
    RequirementKind, Workflow, WorkflowKey,
};

/// Read-only catalog of documentation records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    requirements: IndexMap<String, Requirement>,
    actors: IndexMap<ActorKey, Actor>,
    workflows: IndexMap<WorkflowKey, Workflow>,
    components: IndexMap<ComponentKey, ComponentDetail>,
    layers: IndexMap<String, ArchitectureLayer>,
}

impl Catalog {
    /// Catalog shipped with the application
    pub fn builtin() -> CoreResult<Self> {
        builtin::load()
    }

    /// Parse a catalog from its JSON document form
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Build a catalog from a parsed document, rejecting duplicate keys and
    /// layers that point at unknown components
    pub fn from_document(document: CatalogDocument) -> CoreResult<Self> {
        let mut catalog = Self::default();

        for requirement in document.requirements {
            if requirement.id.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "requirement '{}' has a blank id",
                    requirement.title
                )));
            }
            insert_unique(&mut catalog.requirements, requirement.id.clone(), requirement, "requirement")?;
        }
        for actor in document.actors {
            insert_unique(&mut catalog.actors, actor.key.clone(), actor, "actor")?;
        }
        for workflow in document.workflows {
            insert_unique(&mut catalog.workflows, workflow.key.clone(), workflow, "workflow")?;
        }
        for component in document.components {
            insert_unique(&mut catalog.components, component.key.clone(), component, "component")?;
        }
        for layer in document.layers {
            if let Some(missing) = layer
                .components
                .iter()
                .find(|key| !catalog.components.contains_key(key.as_str()))
            {
                return Err(CoreError::InvalidCatalog(format!(
                    "layer '{}' references unknown component '{missing}'",
                    layer.key
                )));
            }
            insert_unique(&mut catalog.layers, layer.key.clone(), layer, "layer")?;
        }

        log::debug!(
            "Catalog built: {} requirements, {} actors, {} workflows, {} components, {} layers",
            catalog.requirements.len(),
            catalog.actors.len(),
            catalog.workflows.len(),
            catalog.components.len(),
            catalog.layers.len()
        );

        Ok(catalog)
    }

    // ===== Components =====

    /// Look up a component detail record
    #[must_use]
    pub fn component(&self, key: &str) -> Option<&ComponentDetail> {
        self.components.get(key)
    }

    #[must_use]
    pub fn contains_component(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    /// All components in declared order
    pub fn components(&self) -> impl ExactSizeIterator<Item = &ComponentDetail> {
        self.components.values()
    }

    // ===== Actors =====

    #[must_use]
    pub fn actor(&self, key: &str) -> Option<&Actor> {
        self.actors.get(key)
    }

    #[must_use]
    pub fn contains_actor(&self, key: &str) -> bool {
        self.actors.contains_key(key)
    }

    pub fn actors(&self) -> impl ExactSizeIterator<Item = &Actor> {
        self.actors.values()
    }

    // ===== Workflows =====

    #[must_use]
    pub fn workflow(&self, key: &str) -> Option<&Workflow> {
        self.workflows.get(key)
    }

    #[must_use]
    pub fn contains_workflow(&self, key: &str) -> bool {
        self.workflows.contains_key(key)
    }

    pub fn workflows(&self) -> impl ExactSizeIterator<Item = &Workflow> {
        self.workflows.values()
    }

    // ===== Requirements =====

    #[must_use]
    pub fn requirement(&self, id: &str) -> Option<&Requirement> {
        self.requirements.get(id)
    }

    /// Requirements of one kind, in declared order
    pub fn requirements(&self, kind: RequirementKind) -> impl Iterator<Item = &Requirement> {
        self.requirements.values().filter(move |r| r.kind == kind)
    }

    // ===== Layers =====

    #[must_use]
    pub fn layer(&self, key: &str) -> Option<&ArchitectureLayer> {
        self.layers.get(key)
    }

    pub fn layers(&self) -> impl ExactSizeIterator<Item = &ArchitectureLayer> {
        self.layers.values()
    }

    /// Layers that contain the given component
    pub fn layers_of<'a>(&'a self, component: &'a str) -> impl Iterator<Item = &'a ArchitectureLayer> {
        self.layers
            .values()
            .filter(move |layer| layer.components.iter().any(|k| k.as_str() == component))
    }
}

fn insert_unique<K, V>(map: &mut IndexMap<K, V>, key: K, value: V, kind: &str) -> CoreResult<()>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    if map.contains_key(&key) {
        return Err(CoreError::InvalidCatalog(format!("duplicate {kind} key '{key}'")));
    }
    map.insert(key, value);
    Ok(())
}
