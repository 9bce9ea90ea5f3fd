use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, Result};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A (year, month) pair that is always valid once constructed.
///
/// The first and last day are resolved up front so every later date
/// computation on the month is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: NaiveDate,
    last: NaiveDate,
}

// Serialized as `{"year": .., "month": ..}` and re-validated on the way in.
#[derive(Serialize, Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl Serialize for CalendarMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        MonthParts {
            year: self.year(),
            month: self.month(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CalendarMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parts = MonthParts::deserialize(deserializer)?;
        CalendarMonth::new(parts.year, parts.month).map_err(serde::de::Error::custom)
    }
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidConfiguration(format!(
                "year {} is outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            CalendarError::InvalidConfiguration(format!("month {} is outside 1..=12", month))
        })?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| {
            CalendarError::InvalidConfiguration(format!("{:04}-{:02} has no successor", year, month))
        })?;

        Ok(Self {
            first,
            last: next_first - Duration::days(1),
        })
    }

    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn len_days(&self) -> u32 {
        self.last.day()
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last;
        self.first.iter_days().take_while(move |d| *d <= last)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// The following month, or `None` past year 9999.
    pub fn succ(&self) -> Option<Self> {
        Self::containing(self.last + Duration::days(1)).ok()
    }

    /// The preceding month, or `None` before year 1.
    pub fn pred(&self) -> Option<Self> {
        Self::containing(self.first - Duration::days(1)).ok()
    }

    /// Shifts by `count` months in either direction.
    pub fn add_months(&self, count: i32) -> Result<Self> {
        let index = self.year() as i64 * 12 + (self.month() as i64 - 1) + count as i64;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        let year = i32::try_from(year).map_err(|_| {
            CalendarError::InvalidConfiguration(format!("{} months from {} is out of range", count, self))
        })?;
        Self::new(year, month)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

impl FromStr for CalendarMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidConfiguration(format!("expected YYYY-MM, got '{}'", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// One position in the rendered month grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
    pub is_today: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = CalendarMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(feb.len_days(), 29);
        assert_eq!(feb.days().count(), 29);

        let dec = CalendarMonth::new(2023, 12).unwrap();
        assert_eq!(dec.last_day(), date(2023, 12, 31));
        assert_eq!(CalendarMonth::new(2023, 2).unwrap().len_days(), 28);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(CalendarMonth::new(2024, 0), Err(CalendarError::InvalidConfiguration(_))));
        assert!(matches!(CalendarMonth::new(2024, 13), Err(CalendarError::InvalidConfiguration(_))));
        assert!(CalendarMonth::new(0, 6).is_err());
        assert!(CalendarMonth::new(10000, 1).is_err());
        assert!(CalendarMonth::new(9999, 12).is_ok());
    }

    #[test]
    fn test_navigation() {
        let jan = CalendarMonth::new(2024, 1).unwrap();
        assert_eq!(jan.pred(), Some(CalendarMonth::new(2023, 12).unwrap()));
        assert_eq!(jan.succ(), Some(CalendarMonth::new(2024, 2).unwrap()));
        assert_eq!(jan.add_months(-13).unwrap(), CalendarMonth::new(2022, 12).unwrap());
        assert_eq!(jan.add_months(23).unwrap(), CalendarMonth::new(2025, 12).unwrap());

        assert_eq!(CalendarMonth::new(9999, 12).unwrap().succ(), None);
        assert_eq!(CalendarMonth::new(1, 1).unwrap().pred(), None);
    }

    #[test]
    fn test_parse_and_display() {
        let month: CalendarMonth = "2024-02".parse().unwrap();
        assert_eq!(month.to_string(), "February 2024");
        assert!("2024/02".parse::<CalendarMonth>().is_err());
        assert!("2024-13".parse::<CalendarMonth>().is_err());
    }

    #[test]
    fn test_contains() {
        let month = CalendarMonth::new(2024, 3).unwrap();
        assert!(month.contains(date(2024, 3, 1)));
        assert!(month.contains(date(2024, 3, 31)));
        assert!(!month.contains(date(2024, 2, 29)));
        assert!(!month.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_serde_as_parts() {
        let month = CalendarMonth::new(2024, 2).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":2}"#);
        let back: CalendarMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
        assert!(serde_json::from_str::<CalendarMonth>(r#"{"year":2024,"month":13}"#).is_err());
    }
}
