//! archdoc Core Library
//!
//! Navigation and selection state model of the archdoc documentation browser:
//! - Content catalog (requirements, actors, workflows, components, layers)
//! - Selection state (active section, selected component, expanded panels)
//! - Navigator (intents in, read projection out)
//!
//! The library has no presentation code. A front-end owns a [`Navigator`],
//! forwards user intents to it and renders [`types::NavigatorView`].

pub mod catalog;
pub mod error;
pub mod selection;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use selection::SelectionState;
pub use services::Navigator;
pub use traits::{BuiltinCatalogSource, CatalogSource};
pub use types::{Intent, NavigatorView, Section};
