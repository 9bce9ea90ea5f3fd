use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MonthlySummary {
    pub total_pnl: Decimal,
    pub trading_day_count: u32,
    pub winning_day_count: u32,
    pub losing_day_count: u32,
    /// Winning days as a percentage of trading days; zero when there were
    /// no trading days.
    pub win_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_pnl: Decimal,
    pub active_day_count: u32,
}

impl WeekSummary {
    pub fn empty(week_start: NaiveDate, week_end: NaiveDate) -> Self {
        Self {
            week_start,
            week_end,
            total_pnl: Decimal::ZERO,
            active_day_count: 0,
        }
    }

    pub fn add(&mut self, pnl: Decimal) {
        self.total_pnl += pnl;
        self.active_day_count += 1;
    }
}
