use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time::{parse_date, parse_week_start};

/// Settings that shape a month view.
///
/// `today` and `seed` are optional so callers can fall back to the local
/// clock and a random seed respectively.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub week_start: Weekday,
    pub today: Option<NaiveDate>,
    pub seed: Option<u64>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            today: None,
            seed: None,
        }
    }
}

impl CalendarConfig {
    /// Builds a config from raw strings, validating each at the boundary.
    pub fn from_args(week_start: Option<&str>, today: Option<&str>, seed: Option<u64>) -> Result<Self> {
        let week_start = match week_start {
            Some(s) => parse_week_start(s)?,
            None => Weekday::Sun,
        };
        let today = today.map(parse_date).transpose()?;
        Ok(Self {
            week_start,
            today,
            seed,
        })
    }

    pub fn today_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.today.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;

    #[test]
    fn test_defaults_to_sunday() {
        let config = CalendarConfig::from_args(None, None, None).unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.week_start, Weekday::Sun);
    }

    #[test]
    fn test_from_args() {
        let config = CalendarConfig::from_args(Some("mon"), Some("2024-02-14"), Some(3)).unwrap();
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 2, 14));
        assert_eq!(config.seed, Some(3));

        let fallback = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(config.today_or(fallback), NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert_eq!(CalendarConfig::default().today_or(fallback), fallback);
    }

    #[test]
    fn test_rejects_bad_week_start() {
        assert!(matches!(
            CalendarConfig::from_args(Some("8"), None, None),
            Err(CalendarError::InvalidConfiguration(_))
        ));
        assert!(CalendarConfig::from_args(None, Some("14/02/2024"), None).is_err());
    }
}
