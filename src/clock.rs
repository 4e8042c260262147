//! Source of the current instant and calendar day
//!
//! Anything that depends on "today" (summary totals, seed data, default filter
//! windows) takes a `Clock` so tests can pin the date.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Provides the current instant and the user's local calendar day
pub trait Clock {
    /// Current instant, used for `createdAt` stamps
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in the user's local time zone
    fn today(&self) -> NaiveDate;
}

/// Wall clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Freeze at `time` on `today`, with the local day equal to the UTC day
    pub fn at(today: NaiveDate, time: NaiveTime) -> Self {
        Self {
            now: today.and_time(time).and_utc(),
            today,
        }
    }

    /// Freeze at noon on `today`
    pub fn on(today: NaiveDate) -> Self {
        Self::at(today, NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let clock = FixedClock::on(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.now().date_naive(), day);
        assert_eq!(clock.now().to_rfc3339(), "2024-03-15T12:00:00+00:00");
    }

    #[test]
    fn test_system_clock_is_close_to_now() {
        let clock = SystemClock;
        let delta = Utc::now() - clock.now();
        assert!(delta.num_seconds().abs() < 5);
    }
}
