//! 生成器模块
//!
//! 提供库存记录的批量生成功能。

pub mod data_generator;

pub use data_generator::{DataGenerator, GenerationStats, GeneratorConfig};
