//! 导航面板消息

use archdoc_core::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 确认选择（切换到光标所在章节）
    Confirm,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 直接切换到指定章节（数字键 1-5）
    JumpTo(Section),
}
