//! 日期窗口
//!
//! 记录日期在 [end - days, end] 闭区间内均匀分布。

use chrono::{Days, NaiveDate};
use rand::Rng;

/// 以某一天为终点、向前回溯固定天数的日期窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    days: u32,
}

impl DateWindow {
    /// 窗口起点是否落在日历可表示范围内
    pub fn fits(end: NaiveDate, days: u32) -> bool {
        end.checked_sub_days(Days::new(u64::from(days))).is_some()
    }

    /// 创建以 `end` 结尾、跨度为 `days` 天的窗口
    ///
    /// 调用方需先用 `fits` 校验，越界时起点截断到 `NaiveDate::MIN`
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// 在窗口内随机取一天，偏移量包含两端
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.gen_range(0..=self.days);
        self.start
            .checked_add_days(Days::new(u64::from(offset)))
            .unwrap_or_else(|| self.end())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }
}
