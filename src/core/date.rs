use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separators accepted between day, month and year, tried in this order
const DAY_FIRST_SEPARATORS: [char; 3] = ['.', '/', '-'];

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Errors produced while normalizing a birth date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Cannot parse date: {0:?}")]
    InvalidDateFormat(String),
}

/// A validated calendar date used as input for the code engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedDate(NaiveDate);

impl NormalizedDate {
    /// Parse a date literal
    ///
    /// Accepted formats, first match wins:
    /// 1. `DD.MM.YYYY`, `DD/MM/YYYY`, `DD-MM-YYYY` (year segment must have 4 digits)
    /// 2. ISO `YYYY-MM-DD`
    ///
    /// Surrounding whitespace is ignored. The error carries the original input.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let s = input.trim();
        parse_day_first(s)
            .or_else(|| NaiveDate::parse_from_str(s, ISO_FORMAT).ok())
            .map(Self)
            .ok_or_else(|| DateError::InvalidDateFormat(input.to_string()))
    }

    pub fn from_ymd(day: u32, month: u32, year: i32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DateError::InvalidDateFormat(format!("{:02}.{:02}.{:04}", day, month, year))
            })
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Advance the date by whole years
    ///
    /// Feb 29 lands on Feb 28 when the target year is not a leap year.
    /// Saturates at the latest representable date.
    pub fn plus_years(&self, years: u32) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX)
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn parse_day_first(s: &str) -> Option<NaiveDate> {
    DAY_FIRST_SEPARATORS.iter().find_map(|&sep| {
        let parts: Vec<&str> = s.split(sep).collect();
        let [day, month, year] = parts[..] else {
            return None;
        };
        if year.len() != 4 || !is_numeric(day) || !is_numeric(month) || !is_numeric(year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
    })
}

impl FromStr for NormalizedDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for NormalizedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for NormalizedDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}
