pub mod calendar;
pub mod day_record;
pub mod stats;

pub use calendar::{CalendarCell, CalendarMonth};
pub use day_record::{DayOutcome, DayRecord};
pub use stats::{MonthlySummary, WeekSummary};
