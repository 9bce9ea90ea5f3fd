use thiserror::Error;

use crate::model::calendar::CalendarMonth;

/// Errors surfaced by the calendar core.
///
/// Grid building and aggregation never fail; errors only come from the
/// record source and from parsing caller-supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("No trading data available for {month}: {reason}")]
    DataUnavailable {
        month: CalendarMonth,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
