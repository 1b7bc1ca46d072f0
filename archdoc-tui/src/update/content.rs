//! 内容面板更新逻辑
//!
//! 光标移动只修改本地光标；Confirm 把光标所在条目转换成 Navigator 意图。

use archdoc_core::Section;

use crate::message::ContentMessage;
use crate::model::{App, UseCaseEntry};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.current_cursor_mut().select_previous(),
        ContentMessage::SelectNext => app.current_cursor_mut().select_next(),
        ContentMessage::SelectFirst => app.current_cursor_mut().select_first(),
        ContentMessage::SelectLast => app.current_cursor_mut().select_last(),

        // ========== 操作 ==========
        ContentMessage::Confirm => handle_confirm(app),
        ContentMessage::CollapseAll => {
            app.navigator.collapse_all();
            app.set_status("All panels collapsed");
        }
    }
}

fn handle_confirm(app: &mut App) {
    match app.section() {
        // 需求列表只读
        Section::Functional | Section::NonFunctional => {}
        Section::UseCase => toggle_use_case_entry(app),
        Section::Component => select_component_at_cursor(app),
        Section::Architecture => open_layer_at_cursor(app),
    }
}

/// 展开 / 折叠光标所在的角色或流程
fn toggle_use_case_entry(app: &mut App) {
    let Some(entry) = app.use_cases.selected_entry().cloned() else {
        return;
    };
    match entry {
        UseCaseEntry::Actor(key) => app.navigator.toggle_actor(key.as_str()),
        UseCaseEntry::Workflow(key) => app.navigator.toggle_workflow(key.as_str()),
    }
}

/// 选中光标所在的组件
fn select_component_at_cursor(app: &mut App) {
    let key = app
        .navigator
        .catalog()
        .components()
        .nth(app.components.selected)
        .map(|component| component.key.to_string());

    if let Some(key) = key {
        app.navigator.select_component(Some(&key));
        app.clear_status();
    }
}

/// 打开光标所在分层的第一个组件（切换到组件页）
fn open_layer_at_cursor(app: &mut App) {
    let catalog = app.navigator.catalog_handle();
    let Some(layer) = catalog.layers().nth(app.layers.selected) else {
        return;
    };
    let Some(first) = layer.components.first() else {
        app.set_status(format!("Layer '{}' has no components", layer.name));
        return;
    };

    if let Some(index) = catalog.components().position(|c| c.key == *first) {
        app.components.select(index);
    }
    app.switch_section(Section::Component);
    app.navigator.select_component(Some(first.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::builtin_app;
    use archdoc_core::catalog::{DEFAULT_ACTOR_KEY, DEFAULT_WORKFLOW_KEY};

    #[test]
    fn confirm_on_component_selects_it() {
        let mut app = builtin_app();
        app.switch_section(Section::Component);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Confirm);

        let expected = app.navigator.catalog().components().nth(1).unwrap().title.clone();
        assert_eq!(app.navigator.current_component_detail().unwrap().title, expected);
    }

    #[test]
    fn moving_cursor_does_not_change_selection() {
        let mut app = builtin_app();
        app.switch_section(Section::Component);
        update(&mut app, ContentMessage::Confirm);
        let selected = app.navigator.state().selected_component().cloned();

        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.navigator.state().selected_component().cloned(), selected);
    }

    #[test]
    fn confirm_on_default_actor_collapses_it() {
        let mut app = builtin_app();
        app.switch_section(Section::UseCase);
        // 第一个条目是默认展开的角色
        update(&mut app, ContentMessage::Confirm);
        assert!(!app.navigator.is_actor_expanded(DEFAULT_ACTOR_KEY));

        update(&mut app, ContentMessage::Confirm);
        assert!(app.navigator.is_actor_expanded(DEFAULT_ACTOR_KEY));
    }

    #[test]
    fn confirm_on_other_actor_replaces_expansion() {
        let mut app = builtin_app();
        app.switch_section(Section::UseCase);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Confirm);

        let second = app.navigator.catalog().actors().nth(1).unwrap().key.to_string();
        assert!(app.navigator.is_actor_expanded(&second));
        assert!(!app.navigator.is_actor_expanded(DEFAULT_ACTOR_KEY));
        // 流程面板不受影响
        assert!(app.navigator.is_workflow_expanded(DEFAULT_WORKFLOW_KEY));
    }

    #[test]
    fn confirm_on_workflow_entry_toggles_workflow() {
        let mut app = builtin_app();
        app.switch_section(Section::UseCase);
        let actors = app.navigator.catalog().actors().len();
        app.use_cases.cursor.select(actors);

        update(&mut app, ContentMessage::Confirm);
        assert!(!app.navigator.is_workflow_expanded(DEFAULT_WORKFLOW_KEY));
    }

    #[test]
    fn collapse_all_closes_both_accordions() {
        let mut app = builtin_app();
        update(&mut app, ContentMessage::CollapseAll);
        assert!(app.navigator.state().expanded_actor().is_none());
        assert!(app.navigator.state().expanded_workflow().is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn confirm_on_layer_opens_its_first_component() {
        let mut app = builtin_app();
        app.switch_section(Section::Architecture);
        update(&mut app, ContentMessage::Confirm);

        let catalog = app.navigator.catalog_handle();
        let first_layer = catalog.layers().next().unwrap();
        let first_component = &first_layer.components[0];

        assert_eq!(app.section(), Section::Component);
        assert_eq!(
            app.navigator.current_component_detail().unwrap().key,
            *first_component
        );
        let cursor_key = &catalog.components().nth(app.components.selected).unwrap().key;
        assert_eq!(cursor_key, first_component);
    }

    #[test]
    fn cursor_moves_are_per_section() {
        let mut app = builtin_app();
        update(&mut app, ContentMessage::SelectNext);
        assert_eq!(app.functional.selected, 1);

        app.switch_section(Section::NonFunctional);
        assert_eq!(app.non_functional.selected, 0);
        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.non_functional.selected, app.non_functional.len - 1);
        assert_eq!(app.functional.selected, 1);
    }
}
