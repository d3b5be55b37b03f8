//! 日志初始化模块
//!
//! 只初始化结构化日志，不启用指标与分布式追踪。

pub mod tracing;

pub use self::tracing::init;
