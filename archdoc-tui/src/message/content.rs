//! 内容面板消息
//!
//! 处理内容面板中的操作：列表光标移动、选中组件、展开 / 折叠面板

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 操作 ==========
    /// 确认：选中组件 / 展开或折叠面板 / 打开分层中的组件
    Confirm,
    /// 折叠所有角色与流程面板
    CollapseAll,
}
