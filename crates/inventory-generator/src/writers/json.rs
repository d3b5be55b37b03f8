//! JSON 写入器
//!
//! 输出对象数组，键为布局的列名，便于其他工具直接读取。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use inventory_shared::error::Result;
use serde_json::{Map, Value};
use tracing::debug;

use super::{CellValue, OutputFormat, RecordWriter, SheetLayout};
use crate::models::InventoryRecord;

pub struct JsonWriter {
    path: PathBuf,
    layout: SheetLayout,
}

impl JsonWriter {
    pub fn new(path: impl AsRef<Path>, layout: SheetLayout) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout,
        }
    }
}

impl RecordWriter for JsonWriter {
    fn write(&self, records: &[InventoryRecord]) -> Result<PathBuf> {
        let rows = rows_as_json(self.layout, records);

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &rows)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        debug!(path = %self.path.display(), rows = records.len(), "JSON 写入完成");
        Ok(self.path.clone())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// 按布局把记录转为 JSON 对象，空单元格写为空字符串
pub fn rows_as_json(layout: SheetLayout, records: &[InventoryRecord]) -> Vec<Value> {
    records
        .iter()
        .map(|record| {
            let row: Map<String, Value> = layout
                .headers()
                .iter()
                .zip(layout.row(record))
                .map(|(header, cell)| (header.to_string(), cell_to_json(cell)))
                .collect();
            Value::Object(row)
        })
        .collect()
}

fn cell_to_json(cell: CellValue) -> Value {
    match cell {
        CellValue::Text(text) => Value::String(text),
        CellValue::Integer(value) => Value::from(value),
        CellValue::Blank => Value::String(String::new()),
    }
}
