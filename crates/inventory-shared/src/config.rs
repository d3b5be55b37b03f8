//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 生成器配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub record_count: usize,
    /// 日期窗口天数，记录日期落在 [今天 - window_days, 今天]
    pub window_days: i64,
    pub sale_probability: f64,
    pub billed_probability: f64,
    /// 固定随机种子，为空时每次运行结果不同
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            record_count: 50,
            window_days: 180,
            sale_probability: 0.7,
            billed_probability: 0.8,
            seed: None,
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// 输出路径，为空时使用布局的默认文件名
    pub path: Option<String>,
    /// 工作表名称，为空时使用布局的默认名称
    pub sheet_name: Option<String>,
    /// 列布局：standard 或 export
    pub layout: String,
    /// 输出格式：xlsx 或 json
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: None,
            sheet_name: None,
            layout: "standard".to_string(),
            format: "xlsx".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// 默认 warn，正常运行时终端只有完成提示
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: String,
    pub generator: GeneratorSettings,
    pub output: OutputSettings,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            generator: GeneratorSettings::default(),
            output: OutputSettings::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. config/default.toml
    /// 3. config/{environment}.toml（环境由 INVENTORY_ENV 指定）
    /// 4. 环境变量（INVENTORY_ 前缀，层级用双下划线，如 INVENTORY_GENERATOR__RECORD_COUNT）
    pub fn load() -> Result<Self, ConfigError> {
        // .env 不存在时忽略
        dotenvy::dotenv().ok();

        let env = std::env::var("INVENTORY_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(Path::new(&config_dir), &env)
    }

    /// 从指定目录加载配置
    pub fn load_from(config_dir: &Path, env: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                Environment::with_prefix("INVENTORY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
