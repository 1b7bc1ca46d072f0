//! Read projection handed to the presentation layer

use super::{ActorKey, ComponentDetail, Section, WorkflowKey};

/// Snapshot of what should be visible right now
///
/// Borrowed from the navigator; recompute it after every intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorView<'a> {
    /// Active section
    pub section: Section,
    /// Resolved detail of the selected component, `None` if nothing (or an unknown key) is selected
    pub component_detail: Option<&'a ComponentDetail>,
    /// Expanded actor panel
    pub expanded_actor: Option<&'a ActorKey>,
    /// Expanded workflow panel
    pub expanded_workflow: Option<&'a WorkflowKey>,
}

impl NavigatorView<'_> {
    #[must_use]
    pub fn is_actor_expanded(&self, key: &str) -> bool {
        self.expanded_actor.is_some_and(|k| k.as_str() == key)
    }

    #[must_use]
    pub fn is_workflow_expanded(&self, key: &str) -> bool {
        self.expanded_workflow.is_some_and(|k| k.as_str() == key)
    }
}
