//! Calendar-date cache keys and an injectable clock.
//!
//! A daily selection is valid for one local calendar date. The cache key is
//! the date formatted as `YYYY-MM-DD`; time of day never participates.

use chrono::{DateTime, Local, NaiveDate, Utc};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date as a selection cache key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Whether a stored cache key refers to `today`.
///
/// Keys that do not parse as a date never match.
pub fn is_same_day(stored: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(stored.trim(), DATE_KEY_FORMAT)
        .map(|date| date == today)
        .unwrap_or(false)
}

/// Supplies the current instant and the device-local calendar date.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a given date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl FixedClock {
    /// Noon UTC on `today`.
    pub fn on(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);
        Self { now, today }
    }

    pub fn advance_days(&mut self, days: i64) {
        self.today += chrono::Duration::days(days);
        self.now += chrono::Duration::days(days);
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
