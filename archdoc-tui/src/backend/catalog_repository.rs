//! 目录文件加载

use std::fs;
use std::path::PathBuf;

use archdoc_core::error::{CoreError, CoreResult};
use archdoc_core::{BuiltinCatalogSource, Catalog, CatalogSource};

use super::config_service::AppConfig;

/// 覆盖目录文件路径的环境变量
pub const CATALOG_ENV: &str = "ARCHDOC_CATALOG";

/// 从 JSON 文件加载目录
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn load(&self) -> CoreResult<Catalog> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            CoreError::StorageError(format!("{}: {e}", self.path.display()))
        })?;
        Catalog::from_json(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 选择目录来源：环境变量 > 配置文件 > 内置目录
pub fn resolve_catalog_source(
    config: &AppConfig,
    env_override: Option<PathBuf>,
) -> Box<dyn CatalogSource> {
    match env_override.or_else(|| config.catalog_path.clone()) {
        Some(path) => Box::new(JsonFileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource),
    }
}

/// 读取 `ARCHDOC_CATALOG`（空值视为未设置）
pub fn catalog_env_override() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "components": [
            {"key": "openai", "title": "OpenAI (custom)", "description": "From file"}
        ]
    }"#;

    #[test]
    fn loads_catalog_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(&path, MINIMAL).unwrap();

        let catalog = JsonFileCatalogSource::new(&path).load().unwrap();
        assert_eq!(catalog.component("openai").unwrap().title, "OpenAI (custom)");
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = JsonFileCatalogSource::new(tmp.path().join("none.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, CoreError::StorageError(_)));
        assert!(!err.is_expected());
    }

    #[test]
    fn env_override_wins_over_config() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("from-config.json")),
            ..AppConfig::default()
        };

        let source = resolve_catalog_source(&config, Some(PathBuf::from("from-env.json")));
        assert_eq!(source.describe(), "from-env.json");

        let source = resolve_catalog_source(&config, None);
        assert_eq!(source.describe(), "from-config.json");

        let source = resolve_catalog_source(&AppConfig::default(), None);
        assert_eq!(source.describe(), "built-in catalog");
    }
}
