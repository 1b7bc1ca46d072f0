//! 页面状态模块
//!
//! 定义各个页面的光标状态。展开 / 选中等导航状态不在这里，
//! 它们属于 archdoc-core 的 `Navigator`。

mod list;
mod use_cases;

pub use list::ListCursor;
pub use use_cases::{UseCaseEntry, UseCasesState};
