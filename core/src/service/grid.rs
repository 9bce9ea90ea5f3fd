use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::model::calendar::{CalendarCell, CalendarMonth};
use crate::time::{end_of_week, start_of_week};

/// Builds the whole-week grid for `month`, padded with days of the
/// neighbouring months so it starts on `week_start` and ends the day before.
///
/// The result is ascending and its length is always a multiple of 7.
pub fn build_grid(month: CalendarMonth, week_start: Weekday, today: NaiveDate) -> Vec<CalendarCell> {
    let grid_start = start_of_week(month.first_day(), week_start);
    let grid_end = end_of_week(month.last_day(), week_start);

    let cells: Vec<CalendarCell> = grid_start
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| CalendarCell {
            date,
            in_displayed_month: month.contains(date),
            is_today: date == today,
        })
        .collect();

    debug!(month = %month, ?week_start, cells = cells.len(), "Built calendar grid");
    cells
}

/// Splits a grid into rows of seven cells.
pub fn weeks_of(cells: &[CalendarCell]) -> impl Iterator<Item = &[CalendarCell]> {
    cells.chunks(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_february_2024_sunday_start() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let cells = build_grid(month, Weekday::Sun, date(2024, 2, 14));

        assert_eq!(cells.len(), 35);
        assert_eq!(cells.first().unwrap().date, date(2024, 1, 28));
        assert_eq!(cells.last().unwrap().date, date(2024, 3, 2));

        let in_month: Vec<_> = cells.iter().filter(|c| c.in_displayed_month).collect();
        assert_eq!(in_month.len(), 29);
        assert!(!cells[3].in_displayed_month); // Jan 31
        assert!(cells[4].in_displayed_month); // Feb 1

        let today: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2024, 2, 14));
    }

    #[test]
    fn test_month_aligned_to_week_start_has_no_padding() {
        // February 2015 starts on a Sunday and has 28 days.
        let month = CalendarMonth::new(2015, 2).unwrap();
        let cells = build_grid(month, Weekday::Sun, date(2000, 1, 1));
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| c.in_displayed_month));
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_six_week_month() {
        // March 2024 starts on a Friday and has 31 days.
        let month = CalendarMonth::new(2024, 3).unwrap();
        let cells = build_grid(month, Weekday::Sun, date(2024, 3, 1));
        assert_eq!(cells.len(), 42);
        assert_eq!(weeks_of(&cells).count(), 6);
    }

    #[test]
    fn test_monday_start() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let cells = build_grid(month, Weekday::Mon, date(2024, 2, 1));
        assert_eq!(cells.first().unwrap().date, date(2024, 1, 29));
        assert_eq!(cells.last().unwrap().date, date(2024, 3, 3));
        assert_eq!(cells.len(), 35);
    }

    #[test]
    fn test_today_in_padding_is_flagged() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let cells = build_grid(month, Weekday::Sun, date(2024, 3, 1));
        let flagged: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert!(!flagged[0].in_displayed_month);
    }

    fn weekday_strategy() -> impl Strategy<Value = Weekday> {
        (0u8..7).prop_map(|i| crate::time::week_start_from_index(i).unwrap())
    }

    proptest! {
        #[test]
        fn prop_grid_is_whole_weeks(year in 1i32..=9999, m in 1u32..=12, week_start in weekday_strategy()) {
            let month = CalendarMonth::new(year, m).unwrap();
            let cells = build_grid(month, week_start, month.first_day());
            prop_assert_eq!(cells.len() % 7, 0);
            prop_assert!(cells.len() >= 28 && cells.len() <= 42);
            prop_assert_eq!(cells[0].date.weekday(), week_start);
        }

        #[test]
        fn prop_every_month_day_appears_once(year in 1i32..=9999, m in 1u32..=12, week_start in weekday_strategy()) {
            let month = CalendarMonth::new(year, m).unwrap();
            let cells = build_grid(month, week_start, month.first_day());

            for day in month.days() {
                let hits: Vec<_> = cells.iter().filter(|c| c.date == day).collect();
                prop_assert_eq!(hits.len(), 1);
                prop_assert!(hits[0].in_displayed_month);
            }
            let flagged = cells.iter().filter(|c| c.in_displayed_month).count();
            prop_assert_eq!(flagged as u32, month.len_days());
            prop_assert!(cells.windows(2).all(|w| w[0].date < w[1].date));
        }
    }
}
