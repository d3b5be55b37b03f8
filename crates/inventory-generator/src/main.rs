//! Sample Inventory CLI
//!
//! 样例库存生成器的命令行入口点。

use anyhow::Context;
use clap::Parser;
use inventory_generator::cli::{Cli, CommandRunner, Commands, GenerateOptions};
use inventory_shared::config::AppConfig;
use inventory_shared::observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("加载配置失败")?;

    // 命令行指定的日志级别覆盖配置，RUST_LOG 仍然优先
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    observability::init(&config.observability)?;

    let runner = CommandRunner::new(config);

    match cli.command {
        None => {
            runner.run_generate(GenerateOptions::default())?;
        }
        Some(Commands::Generate {
            count,
            output,
            layout,
            format,
            seed,
        }) => {
            runner.run_generate(GenerateOptions {
                count,
                output,
                layout,
                format,
                seed,
            })?;
        }
        Some(Commands::Preview { count, seed }) => {
            runner.run_preview(count, seed)?;
        }
    }

    Ok(())
}
