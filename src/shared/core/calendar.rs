// Date helpers for the clinic's local calendar.
//
// All inputs carry an explicit UTC offset; nothing here reads the host timezone.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("utc offset of {0} minutes is out of range")]
    InvalidOffset(i32),

    #[error("date {0} is outside the supported calendar")]
    OutOfRange(NaiveDate),
}

/// Inclusive instant range covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// `[date 00:00:00.000, date 23:59:59.999]` in `offset`, expressed in UTC.
pub fn day_window(date: NaiveDate, offset: FixedOffset) -> Result<DayWindow, CalendarError> {
    let utc_midnight = date
        .and_time(NaiveTime::MIN)
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .ok_or(CalendarError::OutOfRange(date))?;
    let utc_last_milli = utc_midnight
        .checked_add_signed(Duration::days(1) - Duration::milliseconds(1))
        .ok_or(CalendarError::OutOfRange(date))?;
    Ok(DayWindow {
        start: DateTime::from_naive_utc_and_offset(utc_midnight, Utc),
        end: DateTime::from_naive_utc_and_offset(utc_last_milli, Utc),
    })
}

pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, CalendarError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(CalendarError::InvalidOffset(minutes))
}

/// Whole years lived on `today`, one less when the birthday has not come yet.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
