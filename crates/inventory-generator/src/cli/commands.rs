//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use clap::{Parser, Subcommand};

/// 样例库存表格生成工具
///
/// 不带子命令运行时等同于 `generate` 的默认参数。
#[derive(Parser, Debug)]
#[command(name = "sample-inventory")]
#[command(version, about = "生成用于演示和测试的样例库存表格")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，默认取配置中的值
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 生成记录并写入文件
    ///
    /// 目标文件已存在时直接覆盖。
    Generate {
        /// 记录数量，负数按 0 处理
        #[arg(short, long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// 输出路径，默认使用布局对应的文件名
        #[arg(short, long)]
        output: Option<String>,

        /// 列布局：standard 或 export
        #[arg(long)]
        layout: Option<String>,

        /// 输出格式：xlsx 或 json
        #[arg(long)]
        format: Option<String>,

        /// 随机种子，指定后结果可复现
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 以 JSON 打印记录，不写文件
    Preview {
        /// 记录数量
        #[arg(short, long, default_value = "5", allow_negative_numbers = true)]
        count: i64,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,
    },
}

// ============================================================================
// 单元测试
// ============================================================================
