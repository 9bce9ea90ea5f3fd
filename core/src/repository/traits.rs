use crate::error::Result;
use crate::model::calendar::CalendarMonth;
use crate::model::day_record::DayRecord;

/// Anything that can answer "what happened on each day of this month".
///
/// Implementations return `CalendarError::DataUnavailable` when the backing
/// store has nothing for the month. Retrying is left to the caller.
pub trait DayRecordSource {
    fn fetch_day_records(&self, month: CalendarMonth) -> Result<Vec<DayRecord>>;
}

impl<S: DayRecordSource + ?Sized> DayRecordSource for &S {
    fn fetch_day_records(&self, month: CalendarMonth) -> Result<Vec<DayRecord>> {
        (**self).fetch_day_records(month)
    }
}

impl<S: DayRecordSource + ?Sized> DayRecordSource for Box<S> {
    fn fetch_day_records(&self, month: CalendarMonth) -> Result<Vec<DayRecord>> {
        (**self).fetch_day_records(month)
    }
}
