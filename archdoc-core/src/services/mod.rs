//! 业务逻辑服务层

mod navigator;

pub use navigator::Navigator;
