// src/clock.rs
//
// The only ambient input of the engine. Everything downstream takes a date.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc, Weekday};

use crate::config::consts::BEIJING_UTC_OFFSET_SECS;
use crate::engine::week::parse_date;

pub trait Clock {
    /// Local civil time in China Standard Time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock shifted to UTC+8 (no DST in China).
pub struct BeijingClock;

impl Clock for BeijingClock {
    fn now(&self) -> NaiveDateTime {
        match FixedOffset::east_opt(BEIJING_UTC_OFFSET_SECS) {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Utc::now().naive_utc(),
        }
    }
}

/// Frozen date, midnight. Used for the debug-today override and in tests.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.and_time(chrono::NaiveTime::MIN)
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A parseable debug date wins; anything else falls back to the wall clock.
pub fn from_debug_today(debug_today: Option<&str>) -> Box<dyn Clock> {
    match debug_today.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => match parse_date(text) {
            Some(date) => {
                logd!("Clock: debug today = {}", date);
                Box::new(FixedClock(date))
            }
            None => {
                logw!("Clock: ignoring unparseable debug today {:?}", text);
                Box::new(BeijingClock)
            }
        },
        None => Box::new(BeijingClock),
    }
}

/// Grid column highlighted as "today": Monday..Friday → 0..4, weekend → none.
pub fn today_column(today: NaiveDate) -> Option<usize> {
    match today.weekday() {
        Weekday::Sat | Weekday::Sun => None,
        wd => Some(wd.num_days_from_monday() as usize),
    }
}

/// `YYYY-MM-DD HH:MM` stamp written into exported metadata.
pub fn exported_at(clock: &dyn Clock) -> String {
    clock
        .now()
        .format(crate::config::consts::EXPORTED_AT_FORMAT)
        .to_string()
}
