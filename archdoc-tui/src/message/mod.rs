//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作都通过 Message 来表达。
//! 相当于将形形色色的按键事件翻译成 Update 能够看懂的 Messages，
//! Update 层再把它们转换成 Navigator 的四种意图：
//!     switch-section / select-component / toggle-actor / toggle-workflow
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod content;        // 内容面板子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航面板子消息
//!             Content(ContentMessage),            // 内容面板子消息
//!             GoBack,                             // 返回
//!             ShowHelp,                           // 显示帮助
//!             ToggleTheme,                        // 切换主题
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
