use chrono::{Duration, NaiveDate, Weekday};
use tracing::{debug, warn};
use trading_calendar_core::{CalendarMonth, DayRecord, DayRecordSource, MonthView, MonthViewUseCase};

pub struct App<S: DayRecordSource> {
    source: S,
    pub week_start: Weekday,
    pub today: NaiveDate,
    pub month: CalendarMonth,
    pub view: Option<MonthView>,
    pub selected: Option<NaiveDate>,
    pub error: Option<String>,
}

impl<S: DayRecordSource> App<S> {
    pub fn new(source: S, week_start: Weekday, month: CalendarMonth, today: NaiveDate) -> Self {
        let mut app = Self {
            source,
            week_start,
            today,
            month,
            view: None,
            selected: None,
            error: None,
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        let usecase = MonthViewUseCase::new(&self.source, self.week_start);
        match usecase.load(self.month, self.today) {
            Ok(view) => {
                self.view = Some(view);
                self.error = None;
            }
            Err(err) => {
                warn!(month = %self.month, error = %err, "Could not load month");
                self.view = None;
                self.error = Some(err.to_string());
            }
        }
    }

    fn switch_to(&mut self, month: CalendarMonth) {
        debug!(from = %self.month, to = %month, "Switching month");
        self.month = month;
        self.selected = None;
        self.reload();
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.month.succ() {
            self.switch_to(month);
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(month) = self.month.pred() {
            self.switch_to(month);
        }
    }

    /// Jumps to the month holding today and selects it.
    pub fn go_to_today(&mut self) {
        if let Ok(month) = CalendarMonth::containing(self.today) {
            if month != self.month {
                self.switch_to(month);
            }
            self.select(self.today);
        }
    }

    /// Moves the selection by `days`, crossing into the adjacent month when
    /// the target falls outside the displayed one.
    pub fn move_selection(&mut self, days: i64) {
        let Some(current) = self.selected else {
            let start = if self.month.contains(self.today) {
                self.today
            } else {
                self.month.first_day()
            };
            self.select(start);
            return;
        };

        let target = current + Duration::days(days);
        if !self.month.contains(target) {
            match CalendarMonth::containing(target) {
                Ok(month) => self.switch_to(month),
                Err(_) => return,
            }
        }
        self.select(target);
    }

    /// Only days that have a record can be selected.
    pub fn select(&mut self, date: NaiveDate) {
        let has_record = self
            .view
            .as_ref()
            .is_some_and(|view| view.record_for(date).is_some());
        if has_record {
            self.selected = Some(date);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_record(&self) -> Option<&DayRecord> {
        let date = self.selected?;
        self.view.as_ref()?.record_for(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trading_calendar_core::{CalendarError, MockDayRecordSource};

    struct OfflineSource;

    impl DayRecordSource for OfflineSource {
        fn fetch_day_records(&self, month: CalendarMonth) -> Result<Vec<DayRecord>, CalendarError> {
            Err(CalendarError::DataUnavailable {
                month,
                reason: "offline".to_string(),
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_for(y: i32, m: u32, today: NaiveDate) -> App<MockDayRecordSource> {
        let month = CalendarMonth::new(y, m).unwrap();
        App::new(MockDayRecordSource::with_seed(5), Weekday::Sun, month, today)
    }

    #[test]
    fn test_month_navigation_clears_selection() {
        let mut app = app_for(2024, 2, date(2024, 2, 10));
        app.move_selection(0);
        assert_eq!(app.selected, Some(date(2024, 2, 10)));

        app.next_month();
        assert_eq!(app.month, CalendarMonth::new(2024, 3).unwrap());
        assert_eq!(app.selected, None);
        assert_eq!(app.view.as_ref().unwrap().records.len(), 31);

        app.previous_month();
        app.previous_month();
        assert_eq!(app.month, CalendarMonth::new(2024, 1).unwrap());
    }

    #[test]
    fn test_selection_crosses_month_boundary() {
        let mut app = app_for(2024, 2, date(2024, 2, 29));
        app.move_selection(0);
        app.move_selection(1);
        assert_eq!(app.month, CalendarMonth::new(2024, 3).unwrap());
        assert_eq!(app.selected, Some(date(2024, 3, 1)));
        assert_eq!(app.selected_record().unwrap().date, date(2024, 3, 1));

        app.move_selection(-7);
        assert_eq!(app.month, CalendarMonth::new(2024, 2).unwrap());
        assert_eq!(app.selected, Some(date(2024, 2, 23)));
    }

    #[test]
    fn test_first_move_starts_on_first_day_when_today_elsewhere() {
        let mut app = app_for(2024, 5, date(2030, 1, 1));
        app.move_selection(7);
        assert_eq!(app.selected, Some(date(2024, 5, 1)));
        app.clear_selection();
        assert!(app.selected_record().is_none());
    }

    #[test]
    fn test_go_to_today() {
        let mut app = app_for(2023, 11, date(2024, 2, 14));
        app.go_to_today();
        assert_eq!(app.month, CalendarMonth::new(2024, 2).unwrap());
        assert_eq!(app.selected, Some(date(2024, 2, 14)));
    }

    #[test]
    fn test_unavailable_data_is_reported() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let mut app = App::new(OfflineSource, Weekday::Sun, month, date(2024, 2, 1));
        assert!(app.view.is_none());
        assert!(app.error.as_deref().unwrap().contains("offline"));

        app.move_selection(0);
        assert_eq!(app.selected, None);
    }
}
