//! 数据生成器
//!
//! 按行号顺序批量生成库存记录，供表格写入器使用。

use chrono::{Local, NaiveDate};
use inventory_shared::config::GeneratorSettings;
use inventory_shared::error::{InventoryError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{DateWindow, InventoryRecord, Probabilities};

/// 数据生成器配置
///
/// 控制生成的记录数量、日期窗口和状态分布
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// 生成的记录数量
    pub record_count: usize,
    /// 日期窗口天数
    pub window_days: u32,
    /// 已售与开票概率
    pub probabilities: Probabilities,
}

impl Default for GeneratorConfig {
    /// 默认配置：50 条记录，180 天窗口，70% 已售，已售中 80% 已开票
    fn default() -> Self {
        Self {
            record_count: 50,
            window_days: 180,
            probabilities: Probabilities::default(),
        }
    }
}

impl GeneratorConfig {
    /// 从配置文件中的生成器设置构建
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        let window_days = u32::try_from(settings.window_days).map_err(|_| {
            InventoryError::invalid_argument(
                "window_days",
                format!("必须是非负整数，实际 {}", settings.window_days),
            )
        })?;

        let config = Self {
            record_count: settings.record_count,
            window_days,
            probabilities: Probabilities {
                sale: settings.sale_probability,
                billed: settings.billed_probability,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// 覆盖记录数量
    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    /// 校验概率与日期窗口
    ///
    /// 概率必须位于 [0, 1]，NaN 同样视为非法；窗口起点不能早于日历下限
    pub fn validate(&self) -> Result<()> {
        check_probability("sale_probability", self.probabilities.sale)?;
        check_probability("billed_probability", self.probabilities.billed)?;
        check_window(today(), self.window_days)?;
        Ok(())
    }
}

fn check_window(end: NaiveDate, window_days: u32) -> Result<()> {
    if DateWindow::fits(end, window_days) {
        Ok(())
    } else {
        Err(InventoryError::invalid_argument(
            "window_days",
            format!("{} 天超出日期可表示范围", window_days),
        ))
    }
}

fn check_probability(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InventoryError::invalid_argument(
            field,
            format!("必须位于 [0, 1]，实际 {}", value),
        ))
    }
}

/// 批量数据生成器
pub struct DataGenerator {
    config: GeneratorConfig,
}

impl DataGenerator {
    /// 创建数据生成器，配置非法时返回错误
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 使用默认配置创建生成器
    pub fn with_defaults() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// 以今天为窗口终点、使用线程随机数生成记录
    ///
    /// 每次运行结果不同
    pub fn generate(&self) -> Vec<InventoryRecord> {
        let mut rng = rand::thread_rng();
        self.generate_with(today(), &mut rng)
    }

    /// 使用固定种子生成记录，相同种子且同一天内结果一致
    pub fn generate_seeded(&self, seed: u64) -> Vec<InventoryRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(today(), &mut rng)
    }

    /// 使用指定日期和随机数源生成记录
    ///
    /// 第 i 条记录的标签为 TAG-(1000 + i)，顺序与行号一致
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<InventoryRecord> {
        let window = self.window(today);

        (0..self.config.record_count)
            .map(|index| InventoryRecord::random(index, &window, &self.config.probabilities, rng))
            .collect()
    }

    /// 以 `today` 结尾的日期窗口
    pub fn window(&self, today: NaiveDate) -> DateWindow {
        DateWindow::ending_at(today, self.config.window_days)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 统计数据生成结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub total: usize,
    pub sold: usize,
    pub in_stock: usize,
    pub billed: usize,
    pub billing_pending: usize,
    pub total_amount: u64,
}

impl GenerationStats {
    /// 从生成的记录中收集统计信息
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Default::default()
            },
            |mut stats, record| {
                if record.status.is_sale() {
                    stats.sold += 1;
                    if record.is_billed() {
                        stats.billed += 1;
                    } else {
                        stats.billing_pending += 1;
                    }
                } else {
                    stats.in_stock += 1;
                }
                stats.total_amount += u64::from(record.amount);
                stats
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceState, SaleStatus};

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn generator(record_count: usize) -> DataGenerator {
        DataGenerator::new(GeneratorConfig::default().with_record_count(record_count)).unwrap()
    }

    #[test]
    fn test_generate_count() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in [0, 1, 50, 137] {
            let records = generator(count).generate_with(fixed_today(), &mut rng);
            assert_eq!(records.len(), count);
        }
    }

    #[test]
    fn test_tags_are_contiguous() {
        let mut rng = StdRng::seed_from_u64(2);
        let records = generator(120).generate_with(fixed_today(), &mut rng);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.tag_no, format!("TAG-{}", 1000 + i));
        }
        assert_eq!(records[0].tag_no, "TAG-1000");
    }

    #[test]
    fn test_invoice_matches_status() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generator(1000).generate_with(fixed_today(), &mut rng);

        for record in &records {
            match record.status {
                SaleStatus::InStock => assert_eq!(record.invoice, InvoiceState::NotApplicable),
                SaleStatus::Sale => assert_ne!(record.invoice, InvoiceState::NotApplicable),
            }
        }
    }

    #[test]
    fn test_dates_within_window() {
        let mut rng = StdRng::seed_from_u64(4);
        let generator = generator(1000);
        let records = generator.generate_with(fixed_today(), &mut rng);
        let earliest = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();

        for record in &records {
            assert!(record.date >= earliest && record.date <= fixed_today());
        }
        assert_eq!(generator.window(fixed_today()).start(), earliest);
    }

    #[test]
    fn test_status_distribution() {
        let mut rng = StdRng::seed_from_u64(5);
        let records = generator(10_000).generate_with(fixed_today(), &mut rng);
        let stats = GenerationStats::from_records(&records);

        // 70% 已售、已售中 80% 开票，允许少量偏差
        let sold_ratio = stats.sold as f64 / stats.total as f64;
        let billed_ratio = stats.billed as f64 / stats.sold as f64;
        assert!((0.66..0.74).contains(&sold_ratio), "sold ratio {}", sold_ratio);
        assert!((0.76..0.84).contains(&billed_ratio), "billed ratio {}", billed_ratio);
    }

    #[test]
    fn test_same_seed_same_records() {
        let generator = generator(30);
        let first = generator.generate_with(fixed_today(), &mut StdRng::seed_from_u64(99));
        let second = generator.generate_with(fixed_today(), &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        let generator = DataGenerator::with_defaults();
        let first = generator.generate();
        let second = generator.generate();

        assert_eq!(first.len(), 50);
        assert_eq!(second.len(), 50);
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let mut config = GeneratorConfig::default();
        config.probabilities.sale = 1.5;
        let err = DataGenerator::new(config).err().unwrap();
        assert_eq!(err.code(), "INVALID_ARGUMENT");

        let mut config = GeneratorConfig::default();
        config.probabilities.billed = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_settings() {
        let settings = GeneratorSettings {
            record_count: 12,
            window_days: 30,
            sale_probability: 0.5,
            billed_probability: 0.25,
            seed: None,
        };
        let config = GeneratorConfig::from_settings(&settings).unwrap();

        assert_eq!(config.record_count, 12);
        assert_eq!(config.window_days, 30);
        assert_eq!(config.probabilities.sale, 0.5);
        assert_eq!(config.probabilities.billed, 0.25);

        let negative = GeneratorSettings {
            window_days: -1,
            ..Default::default()
        };
        assert!(GeneratorConfig::from_settings(&negative).is_err());
    }

    #[test]
    fn test_window_beyond_calendar_rejected() {
        let settings = GeneratorSettings {
            window_days: i64::from(u32::MAX),
            ..Default::default()
        };
        let err = GeneratorConfig::from_settings(&settings).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");

        assert!(check_window(fixed_today(), 180).is_ok());
        assert!(check_window(NaiveDate::MIN, 1).is_err());
    }

    #[test]
    fn test_generation_stats() {
        let mut rng = StdRng::seed_from_u64(6);
        let records = generator(200).generate_with(fixed_today(), &mut rng);
        let stats = GenerationStats::from_records(&records);

        assert_eq!(stats.total, 200);
        assert_eq!(stats.sold + stats.in_stock, 200);
        assert_eq!(stats.billed + stats.billing_pending, stats.sold);
        assert_eq!(
            stats.total_amount,
            records.iter().map(|r| u64::from(r.amount)).sum::<u64>()
        );
        assert_eq!(GenerationStats::from_records(&[]), GenerationStats::default());
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.record_count, 50);
        assert_eq!(config.window_days, 180);
        assert_eq!(config.probabilities, Probabilities::default());
    }
}
