use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::Result;
use crate::model::calendar::CalendarMonth;
use crate::model::day_record::DayRecord;
use crate::repository::traits::DayRecordSource;

const TRADING_PROBABILITY: f64 = 0.6;
const NOTE_PROBABILITY: f64 = 0.3;
const MAX_TRADES_PER_DAY: u32 = 8;
// P&L in cents, drawn from [-300.00, 700.00).
const PNL_LOW_CENTS: i64 = -30_000;
const PNL_HIGH_CENTS: i64 = 70_000;
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random stand-in for a real trade journal.
///
/// Each month gets its own RNG derived from the base seed, so a month looks
/// the same every time it is revisited.
#[derive(Debug, Clone)]
pub struct MockDayRecordSource {
    seed: u64,
}

impl MockDayRecordSource {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One record per date of `month`, ascending.
    pub fn generate(&self, month: CalendarMonth) -> Vec<DayRecord> {
        let mut rng = StdRng::seed_from_u64(self.month_seed(month));

        let records: Vec<DayRecord> = month
            .days()
            .map(|date| {
                let has_note = rng.gen_bool(NOTE_PROBABILITY);
                if !rng.gen_bool(TRADING_PROBABILITY) {
                    return DayRecord::idle(date, has_note);
                }
                // A trading day never closes exactly flat; zero is reserved for "no trades".
                let cents = rng.gen_range(PNL_LOW_CENTS..PNL_HIGH_CENTS - 1);
                let cents = if cents >= 0 { cents + 1 } else { cents };
                let trades = rng.gen_range(1..=MAX_TRADES_PER_DAY);
                DayRecord::new(date, Decimal::new(cents, 2), trades, has_note)
            })
            .collect();

        debug!(
            month = %month,
            seed = self.seed,
            days = records.len(),
            trading_days = records.iter().filter(|r| r.is_trading_day()).count(),
            "Generated mock day records"
        );
        records
    }

    fn month_seed(&self, month: CalendarMonth) -> u64 {
        let index = month.year() as u64 * 12 + month.month() as u64;
        self.seed ^ index.wrapping_mul(SEED_MIX)
    }
}

impl Default for MockDayRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DayRecordSource for MockDayRecordSource {
    fn fetch_day_records(&self, month: CalendarMonth) -> Result<Vec<DayRecord>> {
        Ok(self.generate(month))
    }
}
