//! Calendar date sources for the payroll ledger.

use chrono::{Days, Local, NaiveDate};
use parking_lot::Mutex;

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock whose date is set by hand, for tests and simulations.
///
/// # Examples
///
/// ```
/// use staff_payroll::payroll::{Clock, ManualClock};
/// use chrono::NaiveDate;
///
/// let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
/// clock.advance_days(1);
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// ```
#[derive(Debug)]
pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    /// Creates a clock fixed at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Moves the clock to `date`.
    pub fn set(&self, date: NaiveDate) {
        *self.today.lock() = date;
    }

    /// Moves the clock forward by `days`. Saturates at the last representable date.
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock();
        *today = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());

        clock.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 12).unwrap());

        clock.set(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    }

    #[test]
    fn test_clocks_are_object_safe_and_shareable() {
        fn assert_shareable<T: Send + Sync + ?Sized>() {}
        assert_shareable::<dyn Clock>();
        assert_shareable::<ManualClock>();
    }
}
