//! archdoc TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、目录来源与日志 (`backend/`)
//!
//! 章节、组件选中与折叠面板状态全部由 archdoc-core 的 `Navigator` 持有，
//! UI 层只持有光标与焦点。
//!
//!
//! main.rs 执行：
//!
//!     LocalConfigService::load()      // 读取配置（不存在时使用默认值）
//!     logging::init()                 // 日志写入文件
//!     resolve_catalog_source()        // 环境变量 > 配置 > 内置目录
//!     init_terminal()                 // raw mode + 备用屏幕
//!     app::run()                      // 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!     save()                          // 主题改变时写回配置

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use archdoc_core::Navigator;

use backend::{
    catalog_env_override, logging, resolve_catalog_source, ConfigService, LocalConfigService,
};
use util::{init_terminal, restore_terminal};
use view::theme;

fn main() -> Result<()> {
    // 1. 配置与日志
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;

    let log_path = logging::init(&config.log_level)?;
    tracing::info!(
        config = %config_service.path().display(),
        log = %log_path.display(),
        "archdoc starting"
    );

    // 2. 加载目录
    theme::set_theme(config.theme);
    let source = resolve_catalog_source(&config, catalog_env_override());
    let catalog = source
        .load()
        .with_context(|| format!("failed to load catalog from {}", source.describe()))?;
    tracing::info!(source = %source.describe(), "catalog loaded");

    // 3. 创建应用实例
    let navigator = Navigator::new(Arc::new(catalog));
    let mut app = model::App::new(navigator, source.describe(), config.theme);

    // 4. 运行主循环，无论成功失败都恢复终端
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    // 5. 主题改变时写回配置
    if app.theme != config.theme {
        config.theme = app.theme;
        if let Err(e) = config_service.save(&config) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    tracing::info!("archdoc exiting");
    result
}
