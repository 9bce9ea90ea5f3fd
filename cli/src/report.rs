use anyhow::Result;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use trading_calendar_core::service::weeks_of;
use trading_calendar_core::{CalendarMonth, DayOutcome, MonthView, MonthlySummary, WeekSummary};

use crate::format::{format_pnl, format_trades, format_win_rate};

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week")]
    label: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "P&L")]
    pnl: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    month: CalendarMonth,
    summary: &'a MonthlySummary,
    weeks: &'a [WeekSummary],
}

/// Prints the month grid followed by the summary panels.
pub fn show_month(view: &MonthView) {
    println!("\n\x1b[1;36m{}\x1b[0m", view.month);

    let mut builder = Builder::default();
    builder.push_record(view.weekday_labels().map(String::from));

    for week in weeks_of(&view.cells) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if !cell.in_displayed_month {
                    return format!("({})", cell.date.format("%-d"));
                }
                let mut text = cell.date.format("%-d").to_string();
                if cell.is_today {
                    text.push('*');
                }
                if let Some(record) = view.record_for(cell.date) {
                    if record.has_note {
                        text.push_str(" ✎");
                    }
                    if record.is_trading_day() {
                        let marker = match record.outcome() {
                            DayOutcome::Profit => "▲",
                            DayOutcome::Loss => "▼",
                            DayOutcome::NoTrading => "",
                        };
                        text.push_str(&format!("\n{}{}\n{}", marker, format_pnl(record.pnl), format_trades(record.trade_count)));
                    }
                }
                text
            })
            .collect();
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    show_summary(view);
}

/// Prints the monthly summary and weekly breakdown as tables.
pub fn show_summary(view: &MonthView) {
    let summary = &view.summary;
    let rows = vec![
        SummaryRow { metric: "Total P&L", value: format_pnl(summary.total_pnl) },
        SummaryRow { metric: "Trading Days", value: summary.trading_day_count.to_string() },
        SummaryRow { metric: "Win Rate", value: format_win_rate(summary.win_rate) },
        SummaryRow { metric: "Winning Days", value: summary.winning_day_count.to_string() },
        SummaryRow { metric: "Losing Days", value: summary.losing_day_count.to_string() },
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("\n\x1b[1mMonthly Summary\x1b[0m ({})\n{}", view.month, table);

    let rows: Vec<WeekRow> = view
        .weeks
        .iter()
        .enumerate()
        .map(|(i, week)| WeekRow {
            label: format!("Week {}", i + 1),
            dates: format!("{} - {}", week.week_start.format("%b %-d"), week.week_end.format("%b %-d")),
            days: week.active_day_count,
            pnl: format_pnl(week.total_pnl),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("\n\x1b[1mWeekly Breakdown\x1b[0m\n{}", table);
}

pub fn summary_json(view: &MonthView) -> Result<String> {
    let report = SummaryReport {
        month: view.month,
        summary: &view.summary,
        weeks: &view.weeks,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
