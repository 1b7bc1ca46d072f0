//! User intents forwarded by the presentation layer

use serde::{Deserialize, Serialize};

/// One discrete user intent
///
/// Keys and section names are carried as raw strings; the navigator
/// validates them at its boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Intent {
    /// Switch the active section (`functional`, `use-case`, ...)
    SwitchSection(String),
    /// Select a component, or clear the selection with `None`
    SelectComponent(Option<String>),
    /// Expand or collapse an actor panel
    ToggleActor(String),
    /// Expand or collapse a workflow panel
    ToggleWorkflow(String),
}
