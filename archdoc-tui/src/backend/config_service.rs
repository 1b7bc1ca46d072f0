//! 配置服务

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 配色主题
    pub theme: Theme,
    /// 自定义目录文件（为空时使用内置目录）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// 日志级别（`ARCHDOC_LOG` 环境变量优先）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            catalog_path: None,
            log_level: "info".to_string(),
        }
    }
}

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
///
/// 存储位置：~/.config/archdoc/config.json
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台默认配置目录
    pub fn new() -> Self {
        let dir = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
        Self::with_path(dir.join("archdoc").join(CONFIG_FILE))
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // 首次启动：没有配置文件，使用默认值
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content).map_err(write_err)?;
        Ok(())
    }
}
