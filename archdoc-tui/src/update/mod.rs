//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Message，修改 Model。
//! 涉及“显示什么内容”的修改一律交给 archdoc-core 的 Navigator，
//! 这里只直接修改纯 UI 状态（焦点、光标、帮助、主题）。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 内容面板消息
//!         mod navigation;     // 导航栏消息
//!

mod content;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme;

/// 处理一条消息
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 帮助打开时不切换焦点
            if !app.show_help {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggle();
            theme::set_theme(app.theme);
        }

        AppMessage::Noop => {}
    }
}

/// 返回：关闭帮助 → 取消组件选中 → 焦点回到导航栏
fn go_back(app: &mut App) {
    if app.show_help {
        app.show_help = false;
    } else if app.navigator.state().selected_component().is_some() {
        app.navigator.select_component(None);
        app.clear_status();
    } else if app.focus.is_content() {
        app.focus = app.focus.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, NavigationMessage};
    use crate::model::{test_support::builtin_app, FocusPanel};
    use archdoc_core::Section;

    #[test]
    fn quit_sets_flag() {
        let mut app = builtin_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn focus_does_not_move_while_help_is_open() {
        let mut app = builtin_app();
        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);

        update(&mut app, AppMessage::GoBack);
        assert!(!app.show_help);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn go_back_clears_component_selection_before_focus() {
        let mut app = builtin_app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::JumpTo(Section::Component)));
        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert!(app.navigator.current_component_detail().is_some());

        update(&mut app, AppMessage::GoBack);
        assert!(app.navigator.current_component_detail().is_none());
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.focus, FocusPanel::Navigation);
        assert_eq!(app.section(), Section::Component);
    }

    #[test]
    fn theme_toggles() {
        let mut app = builtin_app();
        let before = app.theme;
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme, before.toggle());
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme, before);
    }
}
