//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// `?` 等符号在部分终端上会带 SHIFT，这里对字符键忽略 SHIFT。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const THEME: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 面板切换
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);

    // 操作
    pub const TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const COLLAPSE_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
}
