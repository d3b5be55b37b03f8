//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - 不带子命令 - 生成 50 条记录写入 sample_inventory.xlsx
//! - `generate` - 按参数生成并写入表格或 JSON
//! - `preview` - 把少量记录以 JSON 打印到标准输出
//!
//! # 使用示例
//!
//! ```bash
//! # 默认生成
//! sample-inventory
//!
//! # 生成 200 条导出格式记录
//! sample-inventory generate -c 200 --layout export
//!
//! # 固定种子预览
//! sample-inventory preview -c 3 --seed 42
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::{CommandRunner, GenerateOptions};
