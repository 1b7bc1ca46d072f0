//! 类型定义模块

mod actor;
mod component;
mod intent;
mod keys;
mod layer;
mod requirement;
mod section;
mod view;
mod workflow;

pub use actor::Actor;
pub use component::{ComponentConfiguration, ComponentDetail, ConfigCategory};
pub use intent::Intent;
pub use keys::{ActorKey, ComponentKey, WorkflowKey};
pub use layer::ArchitectureLayer;
pub use requirement::{Priority, Requirement, RequirementKind};
pub use section::Section;
pub use view::NavigatorView;
pub use workflow::{Workflow, WorkflowStep};
