//! xlsx 写入器
//!
//! 单个工作表：首行为加粗的列名并冻结，之后每条记录一行，不写行号列。

use std::path::{Path, PathBuf};

use inventory_shared::error::{InventoryError, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

use super::{CellValue, OutputFormat, RecordWriter, SheetLayout};
use crate::models::InventoryRecord;

/// 单个工作表最多 1,048,576 行，扣除表头后的数据行上限
pub const MAX_DATA_ROWS: usize = 1_048_575;

/// 最窄列宽（字符数）
const MIN_COLUMN_WIDTH: f64 = 10.0;

pub struct XlsxWriter {
    path: PathBuf,
    sheet_name: String,
    layout: SheetLayout,
}

impl XlsxWriter {
    pub fn new(path: impl AsRef<Path>, layout: SheetLayout) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet_name: layout.default_sheet_name().to_string(),
            layout,
        }
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordWriter for XlsxWriter {
    fn write(&self, records: &[InventoryRecord]) -> Result<PathBuf> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(self.sheet_name.as_str())
            .map_err(spreadsheet_error)?;

        for (col, header) in self.layout.headers().iter().enumerate() {
            let col = column_index(col)?;
            worksheet
                .write_string_with_format(0, col, *header, &header_format)
                .map_err(spreadsheet_error)?;
            worksheet
                .set_column_width(col, column_width(header))
                .map_err(spreadsheet_error)?;
        }
        worksheet.set_freeze_panes(1, 0).map_err(spreadsheet_error)?;

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1)
                .map_err(|_| InventoryError::Spreadsheet(format!("行号超出范围: {}", index + 1)))?;

            for (col, cell) in self.layout.row(record).into_iter().enumerate() {
                let col = column_index(col)?;
                match cell {
                    CellValue::Text(text) => {
                        worksheet
                            .write_string(row, col, text)
                            .map_err(spreadsheet_error)?;
                    }
                    CellValue::Integer(value) => {
                        worksheet
                            .write_number(row, col, f64::from(value))
                            .map_err(spreadsheet_error)?;
                    }
                    CellValue::Blank => {}
                }
            }
        }

        workbook.save(&self.path).map_err(spreadsheet_error)?;

        debug!(
            path = %self.path.display(),
            sheet = %self.sheet_name,
            rows = records.len(),
            "xlsx 写入完成"
        );
        Ok(self.path.clone())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Xlsx
    }
}

fn spreadsheet_error(err: XlsxError) -> InventoryError {
    InventoryError::Spreadsheet(err.to_string())
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| InventoryError::Spreadsheet(format!("列号超出范围: {}", col)))
}

/// 按列名长度估算列宽，留出少量边距
fn column_width(header: &str) -> f64 {
    (header.chars().count() as f64 + 4.0).max(MIN_COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width() {
        assert_eq!(column_width("Cpu"), MIN_COLUMN_WIDTH);
        assert_eq!(column_width("Tax Including Amount"), 24.0);
    }

    #[test]
    fn test_default_sheet_name_follows_layout() {
        let writer = XlsxWriter::new("out.xlsx", SheetLayout::Export);
        assert_eq!(writer.sheet_name, "Inventory");
        assert_eq!(writer.path(), Path::new("out.xlsx"));

        let writer = writer.with_sheet_name("Assets");
        assert_eq!(writer.sheet_name, "Assets");
    }
}
