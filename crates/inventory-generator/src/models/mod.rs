//! 库存数据模型
//!
//! 包含库存记录、销售状态、发票状态、日期窗口以及固定的取值目录。

pub mod catalog;
pub mod date_window;
pub mod record;

pub use date_window::DateWindow;
pub use record::{BILLING_PENDING, InventoryRecord, InvoiceState, Probabilities, SaleStatus};
