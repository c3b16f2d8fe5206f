//! Calendar date value with fail-safe construction and day-count arithmetic.
//!
//! A `Date` always holds a real Gregorian date between years 1000 and 9999.
//! Invalid input never errors: constructors substitute the fallback date
//! 01/01/2024 and setters leave the date untouched.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

const DEFAULT_DAY: i32 = 1;
const DEFAULT_MONTH: i32 = 1;
const DEFAULT_YEAR: i32 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DateParts")]
pub struct Date {
    day: i32,
    month: i32,
    year: i32,
}

/// Unchecked wire form; always converted through `Date::new`
#[derive(Deserialize)]
struct DateParts {
    day: i32,
    month: i32,
    year: i32,
}

impl From<DateParts> for Date {
    fn from(parts: DateParts) -> Self {
        Date::new(parts.day, parts.month, parts.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("Date must be in DD/MM/YYYY format")]
    InvalidFormat,
    #[error("Invalid number in date: {0}")]
    InvalidNumber(String),
    #[error("{0:02}/{1:02}/{2} is not a valid calendar date")]
    OutOfRange(i32, i32, i32),
}

impl Date {
    /// Create a date, falling back to 01/01/2024 when the triple is invalid
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        if Self::is_valid(day, month, year) {
            Self { day, month, year }
        } else {
            debug!(
                "Invalid date {}/{}/{}, using fallback {}",
                day,
                month,
                year,
                Self::default()
            );
            Self::default()
        }
    }

    /// Today's date from the local clock
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_day(&mut self, day: i32) {
        if Self::is_valid(day, self.month, self.year) {
            self.day = day;
        } else {
            debug!("Rejected day {} for {}", day, self);
        }
    }

    pub fn set_month(&mut self, month: i32) {
        if Self::is_valid(self.day, month, self.year) {
            self.month = month;
        } else {
            debug!("Rejected month {} for {}", month, self);
        }
    }

    pub fn set_year(&mut self, year: i32) {
        if Self::is_valid(self.day, self.month, year) {
            self.year = year;
        } else {
            debug!("Rejected year {} for {}", year, self);
        }
    }

    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in the month, or 0 for a month outside 1..=12
    pub fn days_in_month(month: i32, year: i32) -> i32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if Self::is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => 0,
        }
    }

    pub fn is_valid(day: i32, month: i32, year: i32) -> bool {
        if !(1..=12).contains(&month) {
            return false;
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return false;
        }

        (1..=Self::days_in_month(month, year)).contains(&day)
    }

    /// Linear day number; consecutive dates map to consecutive integers.
    ///
    /// January and February are counted as months 13 and 14 of the previous
    /// year so the leap day falls at the end of the counting year.
    pub fn day_count(&self) -> i32 {
        let (mut year, mut month) = (self.year, self.month);
        if month < 3 {
            year -= 1;
            month += 12;
        }
        365 * year + year / 4 - year / 100 + year / 400 + ((month + 1) * 306) / 10 + (self.day - 62)
    }

    pub fn before(&self, other: &Date) -> bool {
        self.day_count() < other.day_count()
    }

    pub fn after(&self, other: &Date) -> bool {
        other.before(self)
    }

    /// Absolute number of days between two dates
    pub fn difference(&self, other: &Date) -> i32 {
        (self.day_count() - other.day_count()).abs()
    }

    pub fn tomorrow(&self) -> Date {
        if self.day < Self::days_in_month(self.month, self.year) {
            return Date::new(self.day + 1, self.month, self.year);
        }

        if self.month < 12 {
            return Date::new(1, self.month + 1, self.year);
        }

        // Past 31/12/9999 this yields the fallback date
        Date::new(1, 1, self.year + 1)
    }
}

impl Default for Date {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY,
            month: DEFAULT_MONTH,
            year: DEFAULT_YEAR,
        }
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_count().cmp(&other.day_count())
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    /// Strict `DD/MM/YYYY` parsing; out-of-range dates are errors, not fallbacks
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(DateParseError::InvalidFormat);
        }

        let parse = |part: &str| {
            part.parse::<i32>()
                .map_err(|_| DateParseError::InvalidNumber(part.to_string()))
        };
        let day = parse(parts[0])?;
        let month = parse(parts[1])?;
        let year = parse(parts[2])?;

        if !Self::is_valid(day, month, year) {
            return Err(DateParseError::OutOfRange(day, month, year));
        }

        Ok(Self { day, month, year })
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date.day() as i32, date.month() as i32, date.year())
    }
}
