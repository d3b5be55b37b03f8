//! Sample Inventory Generator
//!
//! 生成用于演示和测试的样例库存表格：随机合成电脑硬件资产记录，写入 xlsx 文件。
//!
//! # 主要模块
//!
//! - `models`: 库存记录、销售与发票状态、日期窗口
//! - `generators`: 批量记录生成器
//! - `writers`: 列布局与 xlsx / JSON 写入器
//! - `cli`: 命令行接口
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use inventory_generator::generators::{DataGenerator, GeneratorConfig};
//! use inventory_generator::writers::{RecordWriter, SheetLayout, XlsxWriter};
//!
//! let config = GeneratorConfig::default().with_record_count(50);
//! let generator = DataGenerator::new(config)?;
//! let records = generator.generate();
//!
//! let writer = XlsxWriter::new("sample_inventory.xlsx", SheetLayout::Standard);
//! writer.write(&records)?;
//! # Ok::<(), inventory_shared::error::InventoryError>(())
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod writers;
