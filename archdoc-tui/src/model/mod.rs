//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是 UI 状态的容器，但“当前显示什么”的唯一真相来源是
//! archdoc-core 的 `Navigator`：
//!     - 当前章节（五选一）
//!     - 当前选中的组件
//!     - 当前展开的角色 / 流程面板（单开手风琴）
//!
//! 这一层只额外保存纯 UI 状态：焦点、侧边栏光标、各页面列表光标、帮助弹窗、主题。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 侧边栏章节导航
//!
//!         pub mod state;      // 页面光标状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,              // 退出标志
//!         pub focus: FocusPanel,              // 当前焦点
//!         pub navigation: NavigationState,    // 侧边栏光标
//!         pub navigator: Navigator,           // 章节 / 选中 / 展开状态
//!         pub functional: ListCursor,         // 各页面光标
//!         ...
//!         pub show_help: bool,                // 帮助弹窗
//!     }
//!
//!     使用：
//!         - 在 main.rs 中创建：App::new(navigator, label, theme)
//!         - 在 update/mod.rs 中修改
//!         - 在 view/layout.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、光标与选中的区别
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     光标（ListCursor）只表示“高亮在哪一行”，移动光标不会改变 Navigator。
//!     按 Enter 才会把意图交给 Navigator：
//!         - 组件页：select_component(光标所在组件)
//!         - 用例页：toggle_actor / toggle_workflow(光标所在条目)
//!
//!     数据流：
//!         用户按 Enter（焦点在内容区）
//!             ↓
//!         event/handler.rs 返回 Content(ContentMessage::Confirm)
//!             ↓
//!         update/content.rs 调用 app.navigator.toggle_actor(...)
//!             ↓
//!         view/pages/use_cases.rs 根据 navigator.is_actor_expanded() 展开面板
//!

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use state::{ListCursor, UseCaseEntry, UseCasesState};

#[cfg(test)]
pub(crate) use app::test_support;
