//! Selection state model
//!
//! Holds which section is active, which component is selected and which
//! actor / workflow panel is expanded. Actor and workflow panels behave as
//! single-open accordions: expanding one key replaces the previous one, and
//! toggling the expanded key again collapses it.
//!
//! The state never consults the catalog. Resolving keys to records is the
//! navigator's job.

use crate::catalog::{DEFAULT_ACTOR_KEY, DEFAULT_WORKFLOW_KEY};
use crate::types::{ActorKey, ComponentKey, Section, WorkflowKey};

/// Navigation and selection state of one browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active_section: Section,
    selected_component: Option<ComponentKey>,
    expanded_actor: Option<ActorKey>,
    expanded_workflow: Option<WorkflowKey>,
}

impl SelectionState {
    /// Session start state: functional section, nothing selected, default
    /// actor and workflow panels expanded
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_section: Section::default(),
            selected_component: None,
            expanded_actor: ActorKey::new(DEFAULT_ACTOR_KEY).ok(),
            expanded_workflow: WorkflowKey::new(DEFAULT_WORKFLOW_KEY).ok(),
        }
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    #[must_use]
    pub fn selected_component(&self) -> Option<&ComponentKey> {
        self.selected_component.as_ref()
    }

    #[must_use]
    pub fn expanded_actor(&self) -> Option<&ActorKey> {
        self.expanded_actor.as_ref()
    }

    #[must_use]
    pub fn expanded_workflow(&self) -> Option<&WorkflowKey> {
        self.expanded_workflow.as_ref()
    }

    /// Replace the active section. Other fields are untouched.
    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Replace the selected component; `None` clears it
    pub fn set_selected_component(&mut self, key: Option<ComponentKey>) {
        self.selected_component = key;
    }

    /// Collapse `key` if it is the expanded actor, otherwise expand exactly `key`
    pub fn toggle_actor(&mut self, key: ActorKey) {
        toggle(&mut self.expanded_actor, key);
    }

    /// Collapse `key` if it is the expanded workflow, otherwise expand exactly `key`
    pub fn toggle_workflow(&mut self, key: WorkflowKey) {
        toggle(&mut self.expanded_workflow, key);
    }

    /// Collapse both accordions
    pub fn collapse_all(&mut self) {
        self.expanded_actor = None;
        self.expanded_workflow = None;
    }

    /// Back to the session start state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle<K: PartialEq>(slot: &mut Option<K>, key: K) {
    if slot.as_ref() == Some(&key) {
        *slot = None;
    } else {
        *slot = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(key: &str) -> ActorKey {
        ActorKey::new(key).unwrap()
    }

    fn workflow(key: &str) -> WorkflowKey {
        WorkflowKey::new(key).unwrap()
    }

    #[test]
    fn starts_with_defaults() {
        let state = SelectionState::new();
        assert_eq!(state.active_section(), Section::Functional);
        assert!(state.selected_component().is_none());
        assert_eq!(state.expanded_actor().unwrap(), DEFAULT_ACTOR_KEY);
        assert_eq!(state.expanded_workflow().unwrap(), DEFAULT_WORKFLOW_KEY);
    }

    #[test]
    fn section_switch_leaves_other_fields_alone() {
        let mut state = SelectionState::new();
        state.set_selected_component(Some(ComponentKey::new("openai").unwrap()));
        state.set_active_section(Section::Architecture);

        assert_eq!(state.active_section(), Section::Architecture);
        assert_eq!(state.selected_component().unwrap(), "openai");
        assert_eq!(state.expanded_actor().unwrap(), DEFAULT_ACTOR_KEY);
    }

    #[test]
    fn selection_accepts_any_key_and_clears() {
        let mut state = SelectionState::new();
        state.set_selected_component(Some(ComponentKey::new("not-in-any-catalog").unwrap()));
        assert_eq!(state.selected_component().unwrap(), "not-in-any-catalog");

        state.set_selected_component(None);
        assert!(state.selected_component().is_none());
    }

    #[test]
    fn double_toggle_restores_previous_value() {
        let mut state = SelectionState::new();
        let before = state.expanded_actor().cloned();

        state.toggle_actor(actor("auditor"));
        state.toggle_actor(actor("auditor"));
        assert_eq!(state.expanded_actor().cloned(), before);

        // 从折叠状态开始同样成立
        state.collapse_all();
        state.toggle_workflow(workflow("access-review"));
        state.toggle_workflow(workflow("access-review"));
        assert!(state.expanded_workflow().is_none());
    }

    #[test]
    fn toggling_expanded_key_collapses_it() {
        let mut state = SelectionState::new();
        state.toggle_actor(actor(DEFAULT_ACTOR_KEY));
        assert!(state.expanded_actor().is_none());

        state.toggle_workflow(workflow(DEFAULT_WORKFLOW_KEY));
        assert!(state.expanded_workflow().is_none());
    }

    #[test]
    fn expanding_another_key_replaces_the_first() {
        let mut state = SelectionState::new();
        state.toggle_actor(actor("a"));
        state.toggle_actor(actor("b"));
        assert_eq!(state.expanded_actor().unwrap(), "b");

        state.toggle_workflow(workflow("w1"));
        state.toggle_workflow(workflow("w2"));
        assert_eq!(state.expanded_workflow().unwrap(), "w2");
    }

    #[test]
    fn actor_and_workflow_accordions_are_independent() {
        let mut state = SelectionState::new();
        state.toggle_actor(actor("auditor"));
        assert_eq!(state.expanded_workflow().unwrap(), DEFAULT_WORKFLOW_KEY);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = SelectionState::new();
        state.set_active_section(Section::Component);
        state.collapse_all();
        state.reset();
        assert_eq!(state, SelectionState::new());
    }
}
