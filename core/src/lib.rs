pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::CalendarConfig;
pub use error::CalendarError;
pub use model::{CalendarCell, CalendarMonth, DayOutcome, DayRecord, MonthlySummary, WeekSummary};
pub use repository::{DayRecordSource, MockDayRecordSource};
pub use service::{build_grid, by_week, summarize};
pub use time::{parse_month, parse_week_start};
pub use usecase::{MonthView, MonthViewUseCase};
