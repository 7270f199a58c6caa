//! Date windows relative to "today" for sampling record dates.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::error::{DemoGenError, DemoGenResult};

/// Half-open window `[today - days_back, today + days_forward)`.
///
/// A window with zero width collapses to its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub days_back: u32,
    pub days_forward: u32,
}

impl DateWindow {
    pub const fn new(days_back: u32, days_forward: u32) -> Self {
        DateWindow {
            days_back,
            days_forward,
        }
    }

    /// First day of the window (inclusive).
    pub fn first_day(&self, today: NaiveDate) -> DemoGenResult<NaiveDate> {
        today
            .checked_sub_days(Days::new(u64::from(self.days_back)))
            .ok_or(DemoGenError::DateOutOfRange {
                from: today,
                days: -i64::from(self.days_back),
            })
    }

    /// End of the window (exclusive).
    pub fn end(&self, today: NaiveDate) -> DemoGenResult<NaiveDate> {
        add_days(today, self.days_forward)
    }

    /// Draw a day uniformly from the window.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, today: NaiveDate) -> DemoGenResult<NaiveDate> {
        let first = self.first_day(today)?;
        let width = (self.end(today)? - first).num_days();
        let offset = match width {
            w if w <= 0 => 0,
            w => rng.gen_range(0..w),
        };
        let offset = u32::try_from(offset).map_err(|_| DemoGenError::DateOutOfRange {
            from: first,
            days: offset,
        })?;
        add_days(first, offset)
    }
}

/// `date + days`, failing instead of leaving chrono's date range.
pub fn add_days(date: NaiveDate, days: u32) -> DemoGenResult<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(DemoGenError::DateOutOfRange {
            from: date,
            days: i64::from(days),
        })
}
