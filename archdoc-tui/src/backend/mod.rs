//!
//! src/backend/mod.rs
//! Backend 层：配置、目录来源与日志
//!
//! Backend 层与 UI 完全解耦，只在启动时被 main.rs 调用一次。
//! 文档内容本身由 archdoc-core 提供，这里只决定“从哪里加载”。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置服务（JSON 文件）
//!         mod catalog_repository;     // 目录来源（内置 / JSON 文件）
//!         pub mod logging;            // tracing 日志初始化
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/archdoc/config.json
//!
//!         {
//!             "theme": "dark",                    // dark | light
//!             "catalogPath": "/path/to.json",     // 可选，自定义目录
//!             "logLevel": "info"                  // tracing 过滤表达式
//!         }
//!
//!     文件不存在时返回默认配置，不会报错。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、目录来源（CatalogSource）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     优先级：
//!         ARCHDOC_CATALOG 环境变量
//!             ↓
//!         配置文件中的 catalogPath
//!             ↓
//!         内置目录（archdoc-core/assets/catalog.json）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端被 TUI 占用，日志写入 ~/.local/share/archdoc/archdoc.log。
//!     过滤级别：ARCHDOC_LOG 环境变量 > 配置文件 logLevel。
//!

mod catalog_repository;
mod config_service;
pub mod logging;

pub use catalog_repository::{catalog_env_override, resolve_catalog_source};
pub use config_service::{ConfigService, LocalConfigService};
