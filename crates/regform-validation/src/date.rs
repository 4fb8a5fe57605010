//! Date and age validation functions

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Layout produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of an "approximate year": 567,648,000,000 ms spread over 18 years,
/// which is exactly 365 days.
pub const APPROXIMATE_YEAR_MS: i64 = 31_536_000_000;

/// How "N years ago" is computed for minimum-age checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgePolicy {
    /// `now - N * 365 days`, ignoring leap days
    #[default]
    Approximate,
    /// Same month and day, N calendar years back
    Calendar,
}

impl AgePolicy {
    /// Latest instant a person may have been born at to be `years` old at `now`
    ///
    /// Returns `None` when the cutoff falls outside chrono's representable range.
    pub fn cutoff(self, years: u32, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            AgePolicy::Approximate => {
                let span = Duration::try_milliseconds(APPROXIMATE_YEAR_MS.checked_mul(i64::from(years))?)?;
                now.checked_sub_signed(span)
            }
            AgePolicy::Calendar => {
                let date = now.date_naive().checked_sub_months(Months::new(years.checked_mul(12)?))?;
                Some(date.and_time(now.time()).and_utc())
            }
        }
    }
}

/// Parses a `YYYY-MM-DD` value. Impossible dates such as `2023-02-30` are rejected.
///
/// The shape is checked first: chrono alone would also accept `1995-6-5`
/// and `+1995-06-15`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

// Exactly `dddd-dd-dd`
fn has_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// True when someone born on `birth` (at UTC midnight) is at least `years` old at `now`
pub fn is_at_least_age(birth: NaiveDate, years: u32, now: DateTime<Utc>, policy: AgePolicy) -> bool {
    let Some(born_at) = birth.and_hms_opt(0, 0, 0) else {
        return false;
    };
    match policy.cutoff(years, now) {
        Some(cutoff) => born_at.and_utc() <= cutoff,
        None => false,
    }
}
