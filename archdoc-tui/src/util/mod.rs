//!
//! src/util/mod.rs
//! Util 层：终端与文本工具
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化与恢复（raw mode、备用屏幕）
//!         mod text;           // 按显示宽度折行、截断
//!
//!     值得一提的是，文本宽度按 unicode-width 计算，而不是按字节或字符数，
//!     这样图标与全角字符也能正确对齐。
//!

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{truncate, wrap};
