//! Workflow records

use serde::{Deserialize, Serialize};

use super::WorkflowKey;

/// A named process across actors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Workflow key
    pub key: WorkflowKey,
    /// Display title
    pub title: String,
    /// Steps in process order
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

/// One step of a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Name of the acting actor
    pub actor: String,
    /// Action summary
    pub action: String,
    /// Longer explanation
    #[serde(default)]
    pub detail: String,
}

impl Workflow {
    /// Position of the first step whose action contains `needle` (case-insensitive)
    #[must_use]
    pub fn step_position(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.steps
            .iter()
            .position(|step| step.action.to_lowercase().contains(&needle))
    }
}
