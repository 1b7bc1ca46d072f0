//! Catalog loading abstract Trait

use crate::catalog::Catalog;
use crate::error::CoreResult;

/// Where a catalog comes from
///
/// Platform implementation:
/// - Embedded asset: [`BuiltinCatalogSource`]
/// - TUI: `JsonFileCatalogSource` (JSON file chosen by configuration)
pub trait CatalogSource {
    /// Load and validate the catalog
    fn load(&self) -> CoreResult<Catalog>;

    /// Short description used in logs and the status bar
    fn describe(&self) -> String;
}

/// Catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn load(&self) -> CoreResult<Catalog> {
        Catalog::builtin()
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_loads() {
        let catalog = BuiltinCatalogSource.load().unwrap();
        assert!(catalog.component("openai").is_some());
        assert_eq!(BuiltinCatalogSource.describe(), "built-in catalog");
    }
}
