use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};
use crate::model::calendar::CalendarMonth;

/// First date of the week containing `date`, for weeks beginning on `week_start`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    date - Duration::days(offset as i64)
}

/// Last date of the week containing `date`.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    start_of_week(date, week_start) + Duration::days(6)
}

/// Short weekday names in display order, starting at `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    let mut labels = [""; 7];
    let mut day = week_start;
    for label in labels.iter_mut() {
        *label = short_name(day);
        day = day.succ();
    }
    labels
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Maps `0..=6` to Sunday..Saturday.
pub fn week_start_from_index(index: u8) -> Result<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(CalendarError::InvalidConfiguration(format!(
            "week start index {} is outside 0..=6",
            index
        ))),
    }
}

/// Accepts a day index (0 = Sunday) or an English day name.
pub fn parse_week_start(input: &str) -> Result<Weekday> {
    let input = input.trim();
    if let Ok(index) = input.parse::<i64>() {
        return u8::try_from(index)
            .map_err(|_| {
                CalendarError::InvalidConfiguration(format!("week start index {} is outside 0..=6", index))
            })
            .and_then(week_start_from_index);
    }
    parse_weekday_str(input)
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(CalendarError::InvalidConfiguration(format!("unknown weekday '{}'", s))),
    }
}

/// Resolves a month reference relative to `today`.
///
/// Understands `this`, `next`, `prev`, relative offsets like `+2` or `-1`,
/// and absolute `YYYY-MM`.
pub fn parse_month(input: &str, today: NaiveDate) -> Result<CalendarMonth> {
    let input = input.trim();
    let current = CalendarMonth::containing(today)?;

    match input.to_lowercase().as_str() {
        "this" | "current" | "now" => return Ok(current),
        "next" => return current.add_months(1),
        "prev" | "previous" | "last" => return current.add_months(-1),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('+').or_else(|| input.strip_prefix('-').filter(|r| !r.contains('-'))) {
        let count: i32 = rest
            .parse()
            .map_err(|_| CalendarError::InvalidConfiguration(format!("invalid month offset '{}'", input)))?;
        let count = if input.starts_with('-') { -count } else { count };
        return current.add_months(count);
    }

    input.parse()
}

/// Parses a `YYYY-MM-DD` date given on the command line.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidConfiguration(format!("invalid date '{}': {}", input, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week() {
        // 2024-02-01 is a Thursday.
        assert_eq!(start_of_week(date(2024, 2, 1), Weekday::Sun), date(2024, 1, 28));
        assert_eq!(start_of_week(date(2024, 2, 1), Weekday::Mon), date(2024, 1, 29));
        assert_eq!(start_of_week(date(2024, 2, 1), Weekday::Thu), date(2024, 2, 1));
        assert_eq!(start_of_week(date(2024, 2, 1), Weekday::Fri), date(2024, 1, 26));
        assert_eq!(end_of_week(date(2024, 2, 29), Weekday::Sun), date(2024, 3, 2));
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_labels(Weekday::Sun), ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert_eq!(weekday_labels(Weekday::Mon)[6], "Sun");
    }

    #[test]
    fn test_parse_week_start() {
        assert_eq!(parse_week_start("0").unwrap(), Weekday::Sun);
        assert_eq!(parse_week_start("6").unwrap(), Weekday::Sat);
        assert_eq!(parse_week_start("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_week_start(" tue ").unwrap(), Weekday::Tue);
        assert!(matches!(parse_week_start("7"), Err(CalendarError::InvalidConfiguration(_))));
        assert!(matches!(parse_week_start("-1"), Err(CalendarError::InvalidConfiguration(_))));
        assert!(matches!(parse_week_start("funday"), Err(CalendarError::InvalidConfiguration(_))));
        assert!(week_start_from_index(7).is_err());
    }

    #[test]
    fn test_parse_month_keywords() {
        let today = date(2024, 1, 15);
        assert_eq!(parse_month("this", today).unwrap(), CalendarMonth::new(2024, 1).unwrap());
        assert_eq!(parse_month("next", today).unwrap(), CalendarMonth::new(2024, 2).unwrap());
        assert_eq!(parse_month("prev", today).unwrap(), CalendarMonth::new(2023, 12).unwrap());
        assert_eq!(parse_month("+14", today).unwrap(), CalendarMonth::new(2025, 3).unwrap());
        assert_eq!(parse_month("-2", today).unwrap(), CalendarMonth::new(2023, 11).unwrap());
        assert_eq!(parse_month("2023-07", today).unwrap(), CalendarMonth::new(2023, 7).unwrap());
        assert!(parse_month("+x", today).is_err());
        assert!(parse_month("july", today).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("2023-02-29").is_err());
    }
}
