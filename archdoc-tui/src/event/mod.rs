//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     接收到键盘事件时，handle_key_event() 依次判断：
//!         - 帮助窗口打开时，只响应 Esc / ? / Enter（关闭）和 Ctrl+C（退出）
//!         - 全局快捷键：q 退出、? 帮助、t 主题、Esc 返回、Tab 切换焦点、1-5 跳转章节
//!         - 焦点位于导航栏，调用 handle_navigation_keys 处理
//!         - 焦点位于内容面板，调用 handle_content_keys 处理
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
