//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑：合并命令行参数与配置，生成记录并写出。

use std::path::PathBuf;

use anyhow::{Context, Result};
use inventory_shared::config::AppConfig;
use inventory_shared::error::InventoryError;
use tracing::{info, warn};

use crate::generators::{DataGenerator, GenerationStats, GeneratorConfig};
use crate::models::InventoryRecord;
use crate::writers::{
    MAX_DATA_ROWS, OutputFormat, SheetLayout, default_output_path, writer_for,
};

/// generate 命令的参数，未指定的项取配置中的值
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub count: Option<i64>,
    pub output: Option<String>,
    pub layout: Option<String>,
    pub format: Option<String>,
    pub seed: Option<u64>,
}

/// 命令执行器
///
/// 持有加载好的应用配置，作为 CLI 与生成逻辑之间的桥梁。
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 generate 命令
    ///
    /// 成功时在标准输出打印一行完成提示，返回写入的文件路径。
    pub fn run_generate(&self, options: GenerateOptions) -> Result<PathBuf> {
        let count = resolve_count(options.count, self.config.generator.record_count);
        check_row_limit(count)?;

        let layout: SheetLayout = options
            .layout
            .as_deref()
            .unwrap_or(&self.config.output.layout)
            .parse()?;
        let format: OutputFormat = options
            .format
            .as_deref()
            .unwrap_or(&self.config.output.format)
            .parse()?;

        let path = options
            .output
            .or_else(|| self.config.output.path.clone())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_output_path(layout, format));
        let sheet_name = self
            .config
            .output
            .sheet_name
            .clone()
            .unwrap_or_else(|| layout.default_sheet_name().to_string());
        let seed = options.seed.or(self.config.generator.seed);

        info!(
            count,
            %layout,
            %format,
            path = %path.display(),
            seed = ?seed,
            "开始生成样例库存"
        );

        let records = self.generate_records(count, seed)?;

        let stats = GenerationStats::from_records(&records);
        info!(
            total = stats.total,
            sold = stats.sold,
            in_stock = stats.in_stock,
            billed = stats.billed,
            billing_pending = stats.billing_pending,
            total_amount = stats.total_amount,
            "记录生成完成"
        );

        let writer = writer_for(format, layout, &path, sheet_name);
        let written = writer
            .write(&records)
            .with_context(|| format!("写入输出文件失败: {}", path.display()))?;

        println!("Sample inventory file created: {}", written.display());
        Ok(written)
    }

    /// 执行 preview 命令
    ///
    /// 记录以 JSON 数组打印到标准输出，不写任何文件。
    pub fn run_preview(&self, count: i64, seed: Option<u64>) -> Result<()> {
        let count = resolve_count(Some(count), self.config.generator.record_count);
        check_row_limit(count)?;
        let seed = seed.or(self.config.generator.seed);

        let records = self.generate_records(count, seed)?;
        let json = serde_json::to_string_pretty(&records).context("序列化记录失败")?;
        println!("{}", json);

        Ok(())
    }

    /// 按配置生成指定数量的记录
    pub fn generate_records(&self, count: usize, seed: Option<u64>) -> Result<Vec<InventoryRecord>> {
        let config = GeneratorConfig::from_settings(&self.config.generator)
            .context("生成器配置无效")?
            .with_record_count(count);
        let generator = DataGenerator::new(config)?;

        Ok(match seed {
            Some(seed) => generator.generate_seeded(seed),
            None => generator.generate(),
        })
    }
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 解析记录数量，负数按 0 处理
fn resolve_count(requested: Option<i64>, default: usize) -> usize {
    match requested {
        None => default,
        Some(count) if count < 0 => {
            warn!(requested = count, "记录数量为负数，按 0 处理");
            0
        }
        Some(count) => usize::try_from(count).unwrap_or(usize::MAX),
    }
}

/// 记录数量不能超过单个工作表可容纳的数据行数，在生成前拒绝
fn check_row_limit(count: usize) -> Result<(), InventoryError> {
    if count > MAX_DATA_ROWS {
        return Err(InventoryError::invalid_argument(
            "count",
            format!("最多 {} 条记录，实际 {}", MAX_DATA_ROWS, count),
        ));
    }
    Ok(())
}
