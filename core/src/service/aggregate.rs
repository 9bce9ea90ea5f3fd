use chrono::{Duration, Weekday};
use rust_decimal::Decimal;
use tracing::debug;

use crate::model::calendar::CalendarMonth;
use crate::model::day_record::DayRecord;
use crate::model::stats::{MonthlySummary, WeekSummary};
use crate::time::start_of_week;

/// Reduces a month of records into headline numbers.
pub fn summarize(records: &[DayRecord]) -> MonthlySummary {
    let mut summary = MonthlySummary::default();

    for record in records {
        summary.total_pnl += record.pnl;
        if record.is_trading_day() {
            summary.trading_day_count += 1;
        }
        if record.pnl > Decimal::ZERO {
            summary.winning_day_count += 1;
        } else if record.pnl < Decimal::ZERO {
            summary.losing_day_count += 1;
        }
    }

    summary.win_rate = if summary.trading_day_count > 0 {
        summary.winning_day_count as f64 / summary.trading_day_count as f64 * 100.0
    } else {
        0.0
    };

    debug!(
        records = records.len(),
        total_pnl = %summary.total_pnl,
        trading_days = summary.trading_day_count,
        "Summarized month"
    );
    summary
}

/// P&L per calendar week, covering every week that touches `month`.
///
/// Only days with at least one trade count towards a week. Weeks without
/// any are still emitted with zero totals.
pub fn by_week(records: &[DayRecord], month: CalendarMonth, week_start: Weekday) -> Vec<WeekSummary> {
    let mut weeks = Vec::new();
    let mut current = start_of_week(month.first_day(), week_start);

    while current <= month.last_day() {
        let week_end = current + Duration::days(6);
        let mut week = WeekSummary::empty(current, week_end);

        for record in records
            .iter()
            .filter(|r| r.date >= current && r.date <= week_end && r.is_trading_day())
        {
            week.add(record.pnl);
        }

        weeks.push(week);
        current += Duration::weeks(1);
    }

    debug!(month = %month, ?week_start, weeks = weeks.len(), "Grouped records by week");
    weeks
}
