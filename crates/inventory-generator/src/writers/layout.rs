//! 表格列布局
//!
//! 把库存记录映射为一行单元格。`Standard` 与记录字段一一对应；
//! `Export` 是面向导入的格式，把型号、配置等字段合并成可读文本。

use std::fmt;
use std::str::FromStr;

use inventory_shared::error::InventoryError;

use crate::models::InventoryRecord;

/// 标准布局的列名，顺序即列顺序
pub const STANDARD_HEADERS: [&str; 13] = [
    "Tag No.",
    "Brand",
    "Model-No.",
    "Product",
    "Cpu",
    "Ram",
    "HDD",
    "Serial-No.",
    "Status",
    "Invoice No.",
    "Date",
    "Tax Including Amount",
    "Gate Pass No",
];

/// 导出布局的列名
pub const EXPORT_HEADERS: [&str; 12] = [
    "Tag Number",
    "Product Name",
    "Category",
    "Specifications",
    "Purchase Date",
    "Serial No",
    "Status",
    "Billing",
    "Invoice No",
    "Price",
    "Gate No",
    "Remark",
];

/// 单元格取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(u32),
    /// 空单元格
    Blank,
}

impl CellValue {
    /// 文本单元格，空字符串写为空单元格
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Blank
        } else {
            Self::Text(value)
        }
    }
}

/// 列布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetLayout {
    #[default]
    Standard,
    Export,
}

impl SheetLayout {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => &STANDARD_HEADERS,
            Self::Export => &EXPORT_HEADERS,
        }
    }

    /// 未指定输出路径时使用的文件名
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Standard => "sample_inventory.xlsx",
            Self::Export => "sample_inventory_export_format.xlsx",
        }
    }

    pub fn default_sheet_name(&self) -> &'static str {
        match self {
            Self::Standard => "Sheet1",
            Self::Export => "Inventory",
        }
    }

    /// 把一条记录渲染为一行，长度与 `headers()` 一致
    pub fn row(&self, record: &InventoryRecord) -> Vec<CellValue> {
        match self {
            Self::Standard => vec![
                CellValue::text(&record.tag_no),
                CellValue::text(&record.brand),
                CellValue::text(&record.model_no),
                CellValue::text(&record.product),
                CellValue::text(&record.cpu),
                CellValue::text(&record.ram),
                CellValue::text(&record.hdd),
                CellValue::text(&record.serial_no),
                CellValue::text(record.status.as_str()),
                CellValue::text(record.invoice.to_string()),
                CellValue::text(record.date_text()),
                CellValue::Integer(record.amount),
                CellValue::text(&record.gate_pass_no),
            ],
            Self::Export => {
                let status = if record.status.is_sale() {
                    "Sold"
                } else {
                    "In Stock"
                };
                let billing = if record.is_billed() {
                    "Billed"
                } else {
                    "Unbilled"
                };
                let invoice_no = record
                    .invoice
                    .invoice_number()
                    .unwrap_or_else(|| "N/A".to_string());

                vec![
                    CellValue::text(&record.tag_no),
                    CellValue::text(record.product_name()),
                    CellValue::text(&record.product),
                    CellValue::text(record.specifications()),
                    CellValue::text(record.date_text()),
                    CellValue::text(&record.serial_no),
                    CellValue::text(status),
                    CellValue::text(billing),
                    CellValue::text(invoice_no),
                    CellValue::Integer(record.amount),
                    CellValue::text(&record.gate_pass_no),
                    CellValue::text(format!(
                        "Generated Test Data. Gate Pass: {}",
                        record.gate_pass_no
                    )),
                ]
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for SheetLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetLayout {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "export" => Ok(Self::Export),
            _ => Err(InventoryError::invalid_argument(
                "layout",
                format!("不支持的布局: {}，支持 standard, export", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceState, SaleStatus};
    use chrono::NaiveDate;

    fn record(status: SaleStatus, invoice: InvoiceState) -> InventoryRecord {
        InventoryRecord {
            tag_no: "TAG-1003".to_string(),
            brand: "Lenovo".to_string(),
            model_no: "LE-4821".to_string(),
            product: "Laptop".to_string(),
            cpu: "Ryzen 5".to_string(),
            ram: "16GB".to_string(),
            hdd: "512GB SSD".to_string(),
            serial_no: "SN482913".to_string(),
            status,
            invoice,
            date: NaiveDate::from_ymd_opt(2025, 2, 9).unwrap(),
            amount: 45210,
            gate_pass_no: "GP-317".to_string(),
        }
    }

    #[test]
    fn test_standard_row() {
        let row = SheetLayout::Standard.row(&record(SaleStatus::Sale, InvoiceState::Billed(20481)));

        assert_eq!(row.len(), STANDARD_HEADERS.len());
        assert_eq!(row[0], CellValue::Text("TAG-1003".to_string()));
        assert_eq!(row[8], CellValue::Text("Sale".to_string()));
        assert_eq!(row[9], CellValue::Text("INV-20481".to_string()));
        assert_eq!(row[10], CellValue::Text("2025-02-09".to_string()));
        assert_eq!(row[11], CellValue::Integer(45210));
    }

    #[test]
    fn test_standard_row_in_stock_invoice_blank() {
        let row = SheetLayout::Standard.row(&record(
            SaleStatus::InStock,
            InvoiceState::NotApplicable,
        ));

        assert_eq!(row[8], CellValue::Text("In Stock".to_string()));
        assert_eq!(row[9], CellValue::Blank);
    }

    #[test]
    fn test_export_row() {
        let row = SheetLayout::Export.row(&record(SaleStatus::Sale, InvoiceState::Pending));

        assert_eq!(row.len(), EXPORT_HEADERS.len());
        assert_eq!(row[1], CellValue::Text("Lenovo LE-4821".to_string()));
        assert_eq!(row[2], CellValue::Text("Laptop".to_string()));
        assert_eq!(
            row[3],
            CellValue::Text("CPU: Ryzen 5 | RAM: 16GB | Storage: 512GB SSD".to_string())
        );
        assert_eq!(row[6], CellValue::Text("Sold".to_string()));
        assert_eq!(row[7], CellValue::Text("Unbilled".to_string()));
        assert_eq!(row[8], CellValue::Text("N/A".to_string()));
        assert_eq!(row[9], CellValue::Integer(45210));
        assert_eq!(
            row[11],
            CellValue::Text("Generated Test Data. Gate Pass: GP-317".to_string())
        );
    }

    #[test]
    fn test_export_row_billed() {
        let row = SheetLayout::Export.row(&record(SaleStatus::Sale, InvoiceState::Billed(77001)));

        assert_eq!(row[7], CellValue::Text("Billed".to_string()));
        assert_eq!(row[8], CellValue::Text("INV-77001".to_string()));
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("standard".parse::<SheetLayout>().unwrap(), SheetLayout::Standard);
        assert_eq!("EXPORT".parse::<SheetLayout>().unwrap(), SheetLayout::Export);
        assert!("wide".parse::<SheetLayout>().is_err());
    }

    #[test]
    fn test_layout_defaults() {
        assert_eq!(SheetLayout::default(), SheetLayout::Standard);
        assert_eq!(SheetLayout::Standard.default_file_name(), "sample_inventory.xlsx");
        assert_eq!(SheetLayout::Export.default_sheet_name(), "Inventory");
    }
}
