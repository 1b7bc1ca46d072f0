//! 用例页面状态
//!
//! 用例页面把角色（Actor）和流程（Workflow）排成一列可折叠面板，
//! 光标依次经过所有角色，再经过所有流程。

use archdoc_core::types::{ActorKey, WorkflowKey};
use archdoc_core::Catalog;

use super::ListCursor;

/// 用例页面中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCaseEntry {
    Actor(ActorKey),
    Workflow(WorkflowKey),
}

/// 用例页面状态
#[derive(Debug, Default)]
pub struct UseCasesState {
    /// 所有条目（角色在前，流程在后）
    pub entries: Vec<UseCaseEntry>,
    /// 光标
    pub cursor: ListCursor,
}

impl UseCasesState {
    /// 根据目录构建条目列表
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let entries: Vec<UseCaseEntry> = catalog
            .actors()
            .map(|actor| UseCaseEntry::Actor(actor.key.clone()))
            .chain(
                catalog
                    .workflows()
                    .map(|workflow| UseCaseEntry::Workflow(workflow.key.clone())),
            )
            .collect();
        let cursor = ListCursor::new(entries.len());
        Self { entries, cursor }
    }

    /// 获取光标所在的条目
    pub fn selected_entry(&self) -> Option<&UseCaseEntry> {
        self.entries.get(self.cursor.selected)
    }

    /// 光标是否停在指定角色上
    pub fn is_actor_selected(&self, key: &ActorKey) -> bool {
        matches!(self.selected_entry(), Some(UseCaseEntry::Actor(k)) if k == key)
    }

    /// 光标是否停在指定流程上
    pub fn is_workflow_selected(&self, key: &WorkflowKey) -> bool {
        matches!(self.selected_entry(), Some(UseCaseEntry::Workflow(k)) if k == key)
    }
}
