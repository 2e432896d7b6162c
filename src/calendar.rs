//! Gregorian date helpers for the calendar view.
//!
//! Months are zero-based throughout (`0` = January) and weekdays start at
//! Sunday (`0` = Sunday), matching how the grid lays out its columns.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::DateParseError;

const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAY_LONG_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn shift(self, delta: i32) -> Self {
        shift_months(self.year, self.month, delta)
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(self) -> u32 {
        first_weekday_of_month(self.year, self.month)
    }

    /// Grid rows needed for the month, 4 to 6.
    pub fn weeks(self) -> usize {
        (self.first_weekday() + self.days()).div_ceil(7) as usize
    }

    /// Month index counted from year 0, used for distances between months.
    pub fn ordinal(self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    pub fn label(self) -> String {
        format!("{} {}", format_month_label(self.month), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// Map key for one calendar day (`month` is zero-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDayKey {
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        day_key(today.year(), today.month0(), today.day())
    }

    pub fn year_month(self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Moves by whole days, crossing month and year boundaries. Keys outside
    /// chrono's supported range stay where they are.
    pub fn offset_days(self, delta: i64) -> Self {
        let moved = NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
            .zip(TimeDelta::try_days(delta))
            .and_then(|(date, delta)| date.checked_add_signed(delta));
        match moved {
            Some(date) => day_key(date.year(), date.month0(), date.day()),
            None => self,
        }
    }
}

impl fmt::Display for CalendarDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDayKey {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateParseError::Malformed(s.to_string());
        // Split from the right so a negative year keeps its sign.
        let mut parts = s.rsplitn(3, '-');
        let day = parts.next().ok_or_else(malformed)?;
        let month = parts.next().ok_or_else(malformed)?;
        let year = parts.next().ok_or_else(malformed)?;
        Ok(Self {
            year: year.parse().map_err(|_| malformed())?,
            month: month.parse().map_err(|_| malformed())?,
            day: day.parse().map_err(|_| malformed())?,
        })
    }
}

pub fn day_key(year: i32, month: u32, day: u32) -> CalendarDayKey {
    CalendarDayKey { year, month, day }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month % 12 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of an arbitrary date, `0` = Sunday. Works for every `i32` year,
/// well past the range chrono accepts.
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = (month % 12) as usize;
    let y = year as i64 - if month < 2 { 1 } else { 0 };
    let sum = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + OFFSETS[month]
        + day as i64;
    sum.rem_euclid(7) as u32
}

pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    weekday_of(year, month, 1)
}

pub fn shift_months(year: i32, month: u32, delta: i32) -> YearMonth {
    let total = year as i64 * 12 + month as i64 + delta as i64;
    YearMonth {
        year: total.div_euclid(12) as i32,
        month: total.rem_euclid(12) as u32,
    }
}

fn entry_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("valid entry date pattern")
    })
}

/// Parses the journal's `dd/mm/yyyy` date format.
pub fn parse_entry_date(text: &str) -> Result<CalendarDayKey, DateParseError> {
    let caps = entry_date_regex()
        .captures(text)
        .ok_or_else(|| DateParseError::Malformed(text.to_string()))?;

    let number = |i: usize| -> Result<u32, DateParseError> {
        caps[i]
            .parse()
            .map_err(|_| DateParseError::Malformed(text.to_string()))
    };
    let day = number(1)?;
    let month = number(2)?;
    let year = number(3)? as i32;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::Impossible { year, month, day })?;
    Ok(day_key(date.year(), date.month0(), date.day()))
}

pub fn format_month_label(month: u32) -> &'static str {
    MONTH_LABELS[(month % 12) as usize]
}

pub fn format_month_short(month: u32) -> &'static str {
    &MONTH_LABELS[(month % 12) as usize][..3]
}

pub fn format_weekday_label(index: u32) -> &'static str {
    WEEKDAY_LABELS[(index % 7) as usize]
}

/// e.g. "Monday, January 1st, 2024".
pub fn format_long_date(year: i32, month: u32, day: u32) -> String {
    let weekday = WEEKDAY_LONG_LABELS[weekday_of(year, month, day) as usize];
    format!(
        "{weekday}, {} {day}{}, {year}",
        format_month_label(month),
        ordinal_suffix(day)
    )
}

/// e.g. "Jan 1, 2024".
pub fn format_short_date(year: i32, month: u32, day: u32) -> String {
    format!("{} {day}, {year}", format_month_short(month))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
