//! tracing 日志初始化
//!
//! 日志统一写到 stderr，stdout 只保留面向用户的输出（完成提示、预览 JSON）。

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::ObservabilityConfig;

/// 初始化 tracing 日志
///
/// RUST_LOG 优先于配置中的 log_level；两者都无效时回退到 warn。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let env_filter = build_filter(&config.log_level);

    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_ansi(use_ansi(
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ))
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// 只有 stderr 连着终端且未设置 NO_COLOR 时才输出颜色
fn use_ansi(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // 非法的过滤表达式不应 panic
        let _ = build_filter("not a [valid filter");
    }

    #[test]
    fn test_ansi_only_on_terminal() {
        assert!(use_ansi(true, false));
        // 重定向到文件时不输出转义码
        assert!(!use_ansi(false, false));
        assert!(!use_ansi(true, true));
    }

    #[test]
    fn test_init_twice_returns_error() {
        let config = ObservabilityConfig::default();
        let _ = init(&config);

        // 全局 subscriber 只能设置一次
        assert!(init(&config).is_err());
    }
}
