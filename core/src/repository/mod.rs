pub mod mock;
pub mod traits;

// Re-export
pub use mock::MockDayRecordSource;
pub use traits::DayRecordSource;
