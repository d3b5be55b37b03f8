//! 输出模块
//!
//! 把生成的记录写入磁盘。目标文件已存在时直接覆盖，不做合并。

pub mod json;
pub mod layout;
pub mod xlsx;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use inventory_shared::error::{InventoryError, Result};

use crate::models::InventoryRecord;

pub use json::JsonWriter;
pub use layout::{CellValue, EXPORT_HEADERS, STANDARD_HEADERS, SheetLayout};
pub use xlsx::{MAX_DATA_ROWS, XlsxWriter};

/// 记录写入器 trait
///
/// 一次调用写出完整文件，返回实际写入的路径。
pub trait RecordWriter {
    fn write(&self, records: &[InventoryRecord]) -> Result<PathBuf>;

    /// 写入器对应的输出格式
    fn format(&self) -> OutputFormat;
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            _ => Err(InventoryError::invalid_argument(
                "format",
                format!("不支持的输出格式: {}，支持 xlsx, json", s),
            )),
        }
    }
}

/// 按格式创建写入器
pub fn writer_for(
    format: OutputFormat,
    layout: SheetLayout,
    path: impl AsRef<Path>,
    sheet_name: impl Into<String>,
) -> Box<dyn RecordWriter> {
    match format {
        OutputFormat::Xlsx => Box::new(XlsxWriter::new(path, layout).with_sheet_name(sheet_name)),
        OutputFormat::Json => Box::new(JsonWriter::new(path, layout)),
    }
}

/// 未指定输出路径时的默认路径：布局默认文件名，扩展名随格式
pub fn default_output_path(layout: SheetLayout, format: OutputFormat) -> PathBuf {
    Path::new(layout.default_file_name()).with_extension(format.extension())
}
