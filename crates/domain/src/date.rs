use chrono::prelude::*;
use chrono::Days;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidDateError {
    #[error("Date: {0} is not a valid YYYY-MM-DD date")]
    Date(String),
    #[error("Time: {0} is not a valid HH:MM time")]
    Time(String),
    #[error("{0} days from {1} is out of the supported date range")]
    OutOfRange(i64, NaiveDate),
}

/// Parses a `YYYY-MM-DD` calendar date
pub fn parse_date(datestr: &str) -> Result<NaiveDate, InvalidDateError> {
    let date = NaiveDate::parse_from_str(datestr.trim(), "%Y-%m-%d")
        .map_err(|_| InvalidDateError::Date(datestr.to_string()))?;
    if !(1900..=2100).contains(&date.year()) {
        return Err(InvalidDateError::Date(datestr.to_string()));
    }
    Ok(date)
}

/// Validates a `HH:MM` wall clock time
pub fn parse_time(timestr: &str) -> Result<NaiveTime, InvalidDateError> {
    NaiveTime::parse_from_str(timestr, "%H:%M").map_err(|_| InvalidDateError::Time(timestr.into()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Day first format used in reminder descriptions
pub fn format_date_dmy(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `date` moved by `days`, which may be negative
pub fn add_days(date: &NaiveDate, days: i64) -> Result<NaiveDate, InvalidDateError> {
    let moved = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    moved.ok_or(InvalidDateError::OutOfRange(days, *date))
}

/// The calendar date in `tz` at the given instant
pub fn today_in(now_millis: i64, tz: &Tz) -> NaiveDate {
    let now = Utc
        .timestamp_millis_opt(now_millis)
        .single()
        .unwrap_or_default();
    now.with_timezone(tz).date_naive()
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// First day of the month and first day of the following month, as
/// `YYYY-MM-DD` strings suitable for half open range queries.
pub fn month_bounds(year: i32, month: u32) -> Option<(String, String)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((format_date(&start), format_date(&end)))
}
