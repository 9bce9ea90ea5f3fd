use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trading result for a single calendar date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Zero means no trading activity that day.
    pub pnl: Decimal,
    pub has_note: bool,
    pub trade_count: u32,
}

/// How a day closed, used to colour calendar cells.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    NoTrading,
    Profit,
    Loss,
}

impl DayRecord {
    pub fn new(date: NaiveDate, pnl: Decimal, trade_count: u32, has_note: bool) -> Self {
        Self {
            date,
            pnl,
            has_note,
            trade_count,
        }
    }

    /// A day without any activity. The note flag is kept since notes are
    /// independent of trading.
    pub fn idle(date: NaiveDate, has_note: bool) -> Self {
        Self::new(date, Decimal::ZERO, 0, has_note)
    }

    pub fn is_trading_day(&self) -> bool {
        self.trade_count > 0
    }

    pub fn outcome(&self) -> DayOutcome {
        if self.pnl.is_zero() {
            DayOutcome::NoTrading
        } else if self.pnl.is_sign_positive() {
            DayOutcome::Profit
        } else {
            DayOutcome::Loss
        }
    }
}
