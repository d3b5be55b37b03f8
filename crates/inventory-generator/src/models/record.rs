//! 库存记录模型
//!
//! 一条记录对应输出表格中的一行，描述一件虚构的电脑硬件资产。
//! 所有字段都由随机抽取生成，不做外部约束校验。

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use inventory_shared::error::InventoryError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::catalog;
use super::date_window::DateWindow;

/// 资产标签编号起点，第 i 行的标签为 TAG-(1000 + i)
pub const TAG_BASE: usize = 1000;

/// 已售但尚未开票时发票列的固定文本
pub const BILLING_PENDING: &str = "Billing Pending";

/// 库存记录
///
/// 序列化字段名即输出表格的列名，字段顺序即列顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "Tag No.")]
    pub tag_no: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Model-No.")]
    pub model_no: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Cpu")]
    pub cpu: String,
    #[serde(rename = "Ram")]
    pub ram: String,
    #[serde(rename = "HDD")]
    pub hdd: String,
    #[serde(rename = "Serial-No.")]
    pub serial_no: String,
    #[serde(rename = "Status")]
    pub status: SaleStatus,
    #[serde(rename = "Invoice No.")]
    pub invoice: InvoiceState,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Tax Including Amount")]
    pub amount: u32,
    #[serde(rename = "Gate Pass No")]
    pub gate_pass_no: String,
}

/// 销售状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    #[serde(rename = "Sale")]
    Sale,
    #[serde(rename = "In Stock")]
    InStock,
}

/// 发票状态
///
/// 只有已售记录才可能有发票；在库记录的发票列恒为空。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum InvoiceState {
    /// 已开票，携带 5 位发票号
    Billed(u32),
    /// 已售未开票
    Pending,
    /// 在库，无发票
    NotApplicable,
}

/// 随机抽取使用的概率
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probabilities {
    /// 记录为已售的概率
    pub sale: f64,
    /// 已售记录已开票的概率
    pub billed: f64,
}

impl Default for Probabilities {
    /// 70% 已售，已售中 80% 已开票
    fn default() -> Self {
        Self {
            sale: 0.7,
            billed: 0.8,
        }
    }
}

impl InventoryRecord {
    /// 生成第 `index` 行的随机记录
    ///
    /// 调用方需保证概率位于 [0, 1]，否则 `gen_bool` 会 panic。
    pub fn random<R: Rng + ?Sized>(
        index: usize,
        window: &DateWindow,
        probabilities: &Probabilities,
        rng: &mut R,
    ) -> Self {
        let status = SaleStatus::draw(probabilities.sale, rng);
        Self::random_with_status(index, status, window, probabilities, rng)
    }

    /// 使用指定销售状态生成随机记录
    pub fn random_with_status<R: Rng + ?Sized>(
        index: usize,
        status: SaleStatus,
        window: &DateWindow,
        probabilities: &Probabilities,
        rng: &mut R,
    ) -> Self {
        let brand = pick(catalog::BRANDS, rng);
        let product = pick(catalog::PRODUCTS, rng);
        let model_no = format!("{}-{}", model_prefix(&brand), rng.gen_range(1000..=9999));
        let cpu = pick(catalog::CPUS, rng);
        let ram = pick(catalog::RAMS, rng);
        let hdd = pick(catalog::HDDS, rng);
        let serial_no = format!("SN{}", rng.gen_range(100000..=999999));
        let invoice = InvoiceState::draw(status, probabilities.billed, rng);
        let date = window.sample(rng);
        let amount = rng.gen_range(15000..=80000);
        let gate_pass_no = format!("GP-{}", rng.gen_range(100..=999));

        Self {
            tag_no: tag_for(index),
            brand,
            model_no,
            product,
            cpu,
            ram,
            hdd,
            serial_no,
            status,
            invoice,
            date,
            amount,
            gate_pass_no,
        }
    }

    pub fn is_billed(&self) -> bool {
        self.invoice.is_billed()
    }

    /// 品牌与型号组合的商品名，如 "Dell DE-1234"
    pub fn product_name(&self) -> String {
        format!("{} {}", self.brand, self.model_no)
    }

    /// 配置摘要，如 "CPU: i5 | RAM: 8GB | Storage: 512GB SSD"
    pub fn specifications(&self) -> String {
        format!(
            "CPU: {} | RAM: {} | Storage: {}",
            self.cpu, self.ram, self.hdd
        )
    }

    /// 日期的 YYYY-MM-DD 文本
    pub fn date_text(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// 第 `index` 行的资产标签
pub fn tag_for(index: usize) -> String {
    format!("TAG-{}", TAG_BASE + index)
}

/// 品牌前两个字符的大写形式
fn model_prefix(brand: &str) -> String {
    brand.chars().take(2).collect::<String>().to_uppercase()
}

fn pick<R: Rng + ?Sized>(values: &[&'static str], rng: &mut R) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

impl SaleStatus {
    /// 按已售概率抽取销售状态
    pub fn draw<R: Rng + ?Sized>(sale_probability: f64, rng: &mut R) -> Self {
        if rng.gen_bool(sale_probability) {
            Self::Sale
        } else {
            Self::InStock
        }
    }

    pub fn is_sale(&self) -> bool {
        matches!(self, Self::Sale)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "Sale",
            Self::InStock => "In Stock",
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InvoiceState {
    /// 根据销售状态抽取发票状态
    ///
    /// 在库记录直接返回 NotApplicable，不消耗随机数。
    pub fn draw<R: Rng + ?Sized>(status: SaleStatus, billed_probability: f64, rng: &mut R) -> Self {
        match status {
            SaleStatus::InStock => Self::NotApplicable,
            SaleStatus::Sale => {
                if rng.gen_bool(billed_probability) {
                    Self::Billed(rng.gen_range(10000..=99999))
                } else {
                    Self::Pending
                }
            }
        }
    }

    pub fn is_billed(&self) -> bool {
        matches!(self, Self::Billed(_))
    }

    /// 发票号文本，仅已开票时存在
    pub fn invoice_number(&self) -> Option<String> {
        match self {
            Self::Billed(number) => Some(format!("INV-{}", number)),
            Self::Pending | Self::NotApplicable => None,
        }
    }
}

impl fmt::Display for InvoiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Billed(number) => write!(f, "INV-{}", number),
            Self::Pending => f.write_str(BILLING_PENDING),
            Self::NotApplicable => Ok(()),
        }
    }
}

impl From<InvoiceState> for String {
    fn from(state: InvoiceState) -> Self {
        state.to_string()
    }
}

impl FromStr for InvoiceState {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::NotApplicable);
        }
        if s == BILLING_PENDING {
            return Ok(Self::Pending);
        }

        s.strip_prefix("INV-")
            .filter(|digits| digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self::Billed)
            .ok_or_else(|| InventoryError::invalid_argument("Invoice No.", format!("无法识别: {}", s)))
    }
}

impl TryFrom<String> for InvoiceState {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
