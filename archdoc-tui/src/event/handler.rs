//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use archdoc_core::Section;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    // 终端大小改变等其他事件由下一帧自动重绘
    if let Event::Key(key_event) = event {
        handle_key_event(key_event, app)
    } else {
        AppMessage::Noop
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助打开时只响应关闭和强制退出
    if app.show_help {
        return handle_help_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key)
        || (DefaultKeymap::FOCUS_LEFT.matches(&key) && app.focus.is_content())
        || (DefaultKeymap::FOCUS_RIGHT.matches(&key) && app.focus.is_navigation())
    {
        return AppMessage::ToggleFocus;
    }

    // 数字键 1-5：直接跳转章节
    if let Some(section) = section_shortcut(&key) {
        return AppMessage::Navigation(NavigationMessage::JumpTo(section));
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

fn section_shortcut(key: &KeyEvent) -> Option<Section> {
    if !key.modifiers.is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).and_then(|d| usize::try_from(d).ok())?;
            Section::from_index(index - 1)
        }
        _ => None,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }
    if DefaultKeymap::COLLAPSE_ALL.matches(&key) {
        return AppMessage::Content(ContentMessage::CollapseAll);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理帮助窗口中的按键
fn handle_help_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => AppMessage::Quit,
        (_, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q')) => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}
