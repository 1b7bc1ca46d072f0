//! Catalog content embedded in the binary

use super::Catalog;
use crate::error::CoreResult;

/// Actor panel expanded when a session starts
pub const DEFAULT_ACTOR_KEY: &str = "requester";

/// Workflow panel expanded when a session starts
pub const DEFAULT_WORKFLOW_KEY: &str = "access-request";

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

pub(super) fn load() -> CoreResult<Catalog> {
    Catalog::from_json(BUILTIN_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequirementKind;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = load().unwrap();
        assert!(catalog.components().len() >= 5);
        assert!(catalog.requirements(RequirementKind::Functional).count() > 0);
        assert!(catalog.requirements(RequirementKind::NonFunctional).count() > 0);
        assert_ne!(catalog.layers().len(), 0);
    }

    #[test]
    fn defaults_exist_in_builtin_catalog() {
        let catalog = load().unwrap();
        assert!(catalog.contains_actor(DEFAULT_ACTOR_KEY));
        assert!(catalog.contains_workflow(DEFAULT_WORKFLOW_KEY));
    }

    #[test]
    fn access_request_steps_follow_approval_order() {
        let catalog = load().unwrap();
        let workflow = catalog.workflow(DEFAULT_WORKFLOW_KEY).unwrap();

        let business = workflow.step_position("business approval").unwrap();
        let technical = workflow.step_position("technical approval").unwrap();
        let implementation = workflow.step_position("implement").unwrap();

        assert!(business < technical);
        assert!(technical < implementation);
    }

    #[test]
    fn every_component_has_configuration() {
        let catalog = load().unwrap();
        for component in catalog.components() {
            assert!(!component.title.is_empty(), "{} has no title", component.key);
            assert!(!component.configuration.is_empty(), "{} has no configuration", component.key);
        }
    }
}
