//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model（包括 Navigator 的投影 `NavigatorView`），不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 导航栏、状态栏、帮助窗口
//!         mod layout;         // 主布局
//!         mod pages;          // 五个章节页面
//!         pub mod theme;      // 主题与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
