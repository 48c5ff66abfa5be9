//! Calendar-agnostic year/month/day triple.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A date as written in a calendar table, either Gregorian ("solar") or
/// Chinese lunisolar ("lunar").
///
/// Both calendars share this shape; which one a value belongs to is decided
/// by where it is used. A field of `0` means "unknown", see
/// [`is_valid`](Self::is_valid).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// Creates a `Date` from its fields, without any validation.
    ///
    /// # Example
    ///
    /// ```
    /// use tabelo::Date;
    ///
    /// let date = Date::new(2023, 1, 22);
    /// assert_eq!("2023-01-22", date.to_string());
    /// ```
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns `true` if none of the fields is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tabelo::Date;
    ///
    /// assert!(Date::new(2022, 12, 30).is_valid());
    /// assert!(!Date::new(2022, 0, 30).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.year != 0 && self.month != 0 && self.day != 0
    }

    /// Interprets the date as a Gregorian date.
    ///
    /// Returns `None` if it does not exist in the Gregorian calendar.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
