use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::calendar::{CalendarCell, CalendarMonth};
use crate::model::day_record::DayRecord;
use crate::model::stats::{MonthlySummary, WeekSummary};
use crate::repository::DayRecordSource;
use crate::service::{aggregate, grid};
use crate::time::weekday_labels;

/// Everything a front-end needs to draw one month.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthView {
    pub month: CalendarMonth,
    pub week_start: Weekday,
    pub today: NaiveDate,
    pub cells: Vec<CalendarCell>,
    pub records: Vec<DayRecord>,
    pub summary: MonthlySummary,
    pub weeks: Vec<WeekSummary>,
}

impl MonthView {
    /// Joins a grid date to its record. Padding days have none.
    pub fn record_for(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn weekday_labels(&self) -> [&'static str; 7] {
        weekday_labels(self.week_start)
    }

    /// Index of the week row holding `date`, if it is on the grid.
    pub fn week_index_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|c| c.date == date).map(|i| i / 7)
    }
}

pub struct MonthViewUseCase<'a, S: DayRecordSource> {
    source: &'a S,
    week_start: Weekday,
}

impl<'a, S: DayRecordSource> MonthViewUseCase<'a, S> {
    pub fn new(source: &'a S, week_start: Weekday) -> Self {
        Self { source, week_start }
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Fetches the month's records and derives the grid and statistics.
    ///
    /// When the source cannot answer its error is returned as-is and
    /// nothing is aggregated.
    pub fn load(&self, month: CalendarMonth, today: NaiveDate) -> Result<MonthView> {
        let records = match self.source.fetch_day_records(month) {
            Ok(records) => records,
            Err(err) => {
                warn!(month = %month, error = %err, "Day records unavailable");
                return Err(err);
            }
        };
        debug!(month = %month, records = records.len(), "Fetched day records");

        let cells = grid::build_grid(month, self.week_start, today);
        let summary = aggregate::summarize(&records);
        let weeks = aggregate::by_week(&records, month, self.week_start);

        Ok(MonthView {
            month,
            week_start: self.week_start,
            today,
            cells,
            records,
            summary,
            weeks,
        })
    }
}
