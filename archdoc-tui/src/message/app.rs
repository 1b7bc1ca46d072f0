//! 应用主消息枚举

use super::{ContentMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 返回：关闭帮助 → 取消组件选中 → 焦点回到导航栏
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 切换深色 / 浅色主题
    ToggleTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
