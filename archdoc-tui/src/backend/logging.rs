//! 日志初始化
//!
//! 终端被 TUI 占用，日志只能写入文件：~/.local/share/archdoc/archdoc.log

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志过滤环境变量
pub const LOG_ENV: &str = "ARCHDOC_LOG";

/// 日志文件路径
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("archdoc")
        .join("archdoc.log")
}

/// 初始化 tracing（同时接管 core 库的 `log` 记录）
///
/// `default_level` 来自配置文件，`ARCHDOC_LOG` 优先。
pub fn init(default_level: &str) -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(path)
}
