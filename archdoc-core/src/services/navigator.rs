//! 导航服务
//!
//! Applies user intents to the selection state and projects the state plus
//! the catalog into what the presentation layer should draw.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::selection::SelectionState;
use crate::types::{
    Actor, ActorKey, ComponentDetail, ComponentKey, Intent, NavigatorView, Section, Workflow,
    WorkflowKey,
};

/// Owns the selection state of one browsing session
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Arc<Catalog>,
    state: SelectionState,
}

impl Navigator {
    /// Create a navigator in the session start state
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: SelectionState::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    // ===== Intents =====

    /// Apply one intent; returns whether the state changed
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let before = self.state.clone();
        match &intent {
            Intent::SwitchSection(raw) => {
                self.switch_section(raw);
            }
            Intent::SelectComponent(key) => self.select_component(key.as_deref()),
            Intent::ToggleActor(key) => self.toggle_actor(key),
            Intent::ToggleWorkflow(key) => self.toggle_workflow(key),
        }
        let changed = before != self.state;
        log::trace!("Intent {intent:?} applied (changed: {changed})");
        changed
    }

    /// Switch to the section named `raw`. Unknown names are ignored and
    /// `false` is returned.
    pub fn switch_section(&mut self, raw: &str) -> bool {
        match raw.parse::<Section>() {
            Ok(section) => {
                self.set_active_section(section);
                true
            }
            Err(e) => {
                log::debug!("Ignoring section switch: {e}");
                false
            }
        }
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.state.set_active_section(section);
    }

    /// Select a component by key; `None` or a blank key clears the selection.
    ///
    /// The key is stored even if the catalog does not know it; reads then
    /// resolve to no detail.
    pub fn select_component(&mut self, key: Option<&str>) {
        let key = key.and_then(|raw| ComponentKey::new(raw).ok());
        self.state.set_selected_component(key);
    }

    /// Toggle an actor panel. Blank keys and keys the catalog does not know
    /// are ignored, so an unknown actor is never expanded.
    pub fn toggle_actor(&mut self, key: &str) {
        match ActorKey::new(key) {
            Ok(key) if self.catalog.contains_actor(key.as_str()) => self.state.toggle_actor(key),
            Ok(key) => log::debug!("Ignoring toggle of unknown actor '{key}'"),
            Err(e) => log::debug!("Ignoring actor toggle: {e}"),
        }
    }

    /// Toggle a workflow panel. Blank keys and keys the catalog does not
    /// know are ignored.
    pub fn toggle_workflow(&mut self, key: &str) {
        match WorkflowKey::new(key) {
            Ok(key) if self.catalog.contains_workflow(key.as_str()) => {
                self.state.toggle_workflow(key);
            }
            Ok(key) => log::debug!("Ignoring toggle of unknown workflow '{key}'"),
            Err(e) => log::debug!("Ignoring workflow toggle: {e}"),
        }
    }

    pub fn collapse_all(&mut self) {
        self.state.collapse_all();
    }

    /// Back to the session start state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    // ===== Reads =====

    #[must_use]
    pub fn current_section(&self) -> Section {
        self.state.active_section()
    }

    /// Detail record of the selected component, or `None` when nothing is
    /// selected or the selected key is not in the catalog
    #[must_use]
    pub fn current_component_detail(&self) -> Option<&ComponentDetail> {
        self.state
            .selected_component()
            .and_then(|key| self.catalog.component(key.as_str()))
    }

    #[must_use]
    pub fn is_actor_expanded(&self, key: &str) -> bool {
        self.state.expanded_actor().is_some_and(|k| k == key)
    }

    #[must_use]
    pub fn is_workflow_expanded(&self, key: &str) -> bool {
        self.state.expanded_workflow().is_some_and(|k| k == key)
    }

    /// Record of the expanded actor, if it exists in the catalog
    #[must_use]
    pub fn expanded_actor_detail(&self) -> Option<&Actor> {
        self.state
            .expanded_actor()
            .and_then(|key| self.catalog.actor(key.as_str()))
    }

    /// Record of the expanded workflow, if it exists in the catalog
    #[must_use]
    pub fn expanded_workflow_detail(&self) -> Option<&Workflow> {
        self.state
            .expanded_workflow()
            .and_then(|key| self.catalog.workflow(key.as_str()))
    }

    /// Projection for the presentation layer
    #[must_use]
    pub fn view(&self) -> NavigatorView<'_> {
        NavigatorView {
            section: self.current_section(),
            component_detail: self.current_component_detail(),
            expanded_actor: self.state.expanded_actor(),
            expanded_workflow: self.state.expanded_workflow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_ACTOR_KEY, DEFAULT_WORKFLOW_KEY};
    use crate::test_utils::sample_navigator;

    #[test]
    fn default_state() {
        let nav = sample_navigator();
        assert_eq!(nav.current_section(), Section::Functional);
        assert!(nav.current_component_detail().is_none());
        assert!(nav.is_actor_expanded(DEFAULT_ACTOR_KEY));
        assert!(nav.is_workflow_expanded(DEFAULT_WORKFLOW_KEY));
    }

    #[test]
    fn last_valid_section_wins() {
        let mut nav = sample_navigator();
        for section in [Section::UseCase, Section::Architecture, Section::NonFunctional] {
            assert!(nav.switch_section(section.as_str()));
            assert_eq!(nav.current_section(), section);
        }
    }

    #[test]
    fn invalid_section_is_a_noop() {
        let mut nav = sample_navigator();
        nav.set_active_section(Section::Component);

        assert!(!nav.switch_section("deployment"));
        assert!(!nav.switch_section(""));
        assert!(!nav.switch_section(" functional "));
        assert_eq!(nav.current_section(), Section::Component);
    }

    #[test]
    fn component_selection_resolves_against_catalog() {
        let mut nav = sample_navigator();

        nav.select_component(Some("key-vault"));
        assert_eq!(nav.current_component_detail().unwrap().title, "Azure Key Vault");

        nav.select_component(Some("missing"));
        assert!(nav.current_component_detail().is_none());
        assert_eq!(nav.state().selected_component().unwrap(), "missing");

        nav.select_component(None);
        assert!(nav.state().selected_component().is_none());
    }

    #[test]
    fn blank_component_key_clears_selection() {
        let mut nav = sample_navigator();
        nav.select_component(Some("openai"));
        nav.select_component(Some("  "));
        assert!(nav.state().selected_component().is_none());
    }

    #[test]
    fn actor_toggles_are_mutually_exclusive() {
        let mut nav = sample_navigator();
        nav.toggle_actor("requester");
        assert!(!nav.is_actor_expanded("requester"));

        nav.toggle_actor("requester");
        nav.toggle_actor("business-approver");
        assert!(!nav.is_actor_expanded("requester"));
        assert!(nav.is_actor_expanded("business-approver"));
        assert_eq!(nav.expanded_actor_detail().unwrap().name, "Business Approver");
    }

    #[test]
    fn unknown_actor_key_is_never_expanded() {
        let mut nav = sample_navigator();
        let before = nav.state().clone();

        nav.toggle_actor("ghost");
        assert!(!nav.is_actor_expanded("ghost"));
        assert!(nav.is_actor_expanded(DEFAULT_ACTOR_KEY));
        assert_eq!(nav.expanded_actor_detail().unwrap().key, DEFAULT_ACTOR_KEY);
        assert_eq!(nav.state(), &before);
        assert!(!nav.dispatch(Intent::ToggleActor("ghost".into())));
    }

    #[test]
    fn unknown_workflow_key_is_never_expanded() {
        let mut nav = sample_navigator();
        let before = nav.state().clone();

        nav.toggle_workflow("ghost-wf");
        assert!(!nav.is_workflow_expanded("ghost-wf"));
        assert!(nav.is_workflow_expanded(DEFAULT_WORKFLOW_KEY));
        assert_eq!(nav.state(), &before);
        assert!(!nav.dispatch(Intent::ToggleWorkflow("ghost-wf".into())));
    }

    #[test]
    fn blank_toggle_keys_are_ignored() {
        let mut nav = sample_navigator();
        let before = nav.state().clone();
        nav.toggle_actor("");
        nav.toggle_workflow(" ");
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn dispatch_reports_changes() {
        let mut nav = sample_navigator();
        assert!(nav.dispatch(Intent::SwitchSection("component".into())));
        assert!(!nav.dispatch(Intent::SwitchSection("component".into())));
        assert!(!nav.dispatch(Intent::SwitchSection("nope".into())));
        assert!(nav.dispatch(Intent::SelectComponent(Some("openai".into()))));
        assert!(nav.dispatch(Intent::ToggleWorkflow("access-review".into())));
        assert!(nav.is_workflow_expanded("access-review"));
        assert!(nav.dispatch(Intent::SelectComponent(None)));
        assert!(!nav.dispatch(Intent::ToggleActor(String::new())));
    }

    #[test]
    fn view_mirrors_reads() {
        let mut nav = sample_navigator();
        nav.set_active_section(Section::Component);
        nav.select_component(Some("openai"));
        nav.toggle_workflow(DEFAULT_WORKFLOW_KEY);

        let view = nav.view();
        assert_eq!(view.section, Section::Component);
        assert_eq!(view.component_detail.unwrap().title, "Azure OpenAI Service");
        assert!(view.is_actor_expanded(DEFAULT_ACTOR_KEY));
        assert!(!view.is_workflow_expanded(DEFAULT_WORKFLOW_KEY));
        assert!(view.expanded_workflow.is_none());
    }

    #[test]
    fn reads_are_idempotent() {
        let mut nav = sample_navigator();
        nav.select_component(Some("openai"));
        let first = nav.current_component_detail().cloned();
        let second = nav.current_component_detail().cloned();
        assert_eq!(first, second);
        assert_eq!(nav.view(), nav.view());
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut nav = sample_navigator();
        nav.set_active_section(Section::Architecture);
        nav.select_component(Some("openai"));
        nav.collapse_all();
        nav.reset();
        assert_eq!(nav.state(), &SelectionState::new());
    }
}
