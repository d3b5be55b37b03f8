//! 统一错误处理模块
//!
//! 定义生成器中共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum InventoryError {
    // ==================== 输出错误 ====================
    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("表格写入失败: {0}")]
    Spreadsheet(String),

    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    // ==================== 验证错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Spreadsheet(_) => "SPREADSHEET_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }

    /// 构造参数错误
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 是否为输出阶段的错误（写文件、写表格、序列化）
    pub fn is_output_failure(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Spreadsheet(_) | Self::Serialization(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = InventoryError::Spreadsheet("disk full".to_string());
        assert_eq!(err.code(), "SPREADSHEET_ERROR");

        let err = InventoryError::invalid_argument("sale_probability", "必须位于 [0, 1]");
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_error_display() {
        let err = InventoryError::invalid_argument("window_days", "不能为负数");
        assert_eq!(err.to_string(), "无效的参数: window_days - 不能为负数");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InventoryError = io.into();
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.is_output_failure());
    }

    #[test]
    fn test_output_failure_classification() {
        assert!(InventoryError::Spreadsheet("x".into()).is_output_failure());
        assert!(!InventoryError::invalid_argument("a", "b").is_output_failure());
    }
}
