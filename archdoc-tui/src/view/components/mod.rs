//! 通用 UI 组件

pub mod help;
pub mod navigation;
pub mod statusbar;
