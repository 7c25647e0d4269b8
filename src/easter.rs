//! Date of Christian Easter (Meeus 1991, ch. 8).
//!
//! Years up to the switch year use the Julian computus, later years the
//! Gregorian one. Division and remainder follow floor semantics, so the
//! Julian branch is also defined for years before 1 AD.

use std::fmt;

use crate::config::GREGORIAN_CHANGE;
use crate::julian_day::Converter;

/// Month (3 or 4) and day of Easter Sunday.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EasterDate {
    pub month: u32,
    pub day: u32,
}

impl EasterDate {
    /// Returns `(month, day)`.
    pub fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }
}

impl From<EasterDate> for (u32, u32) {
    fn from(date: EasterDate) -> Self {
        date.month_day()
    }
}

impl fmt::Display for EasterDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Easter of `year`, switching to the Gregorian computus after 1582.
///
/// # Example
///
/// ```
/// use astrodato::easter;
///
/// assert_eq!((4, 23), easter(2000).month_day());
/// assert_eq!((4, 12), easter(179).month_day());
/// ```
pub fn easter(year: i32) -> EasterDate {
    easter_with_switch(year, GREGORIAN_CHANGE.year)
}

/// Easter of `year`, using the Julian computus up to and including
/// `switch_year`.
pub fn easter_with_switch(year: i32, switch_year: i32) -> EasterDate {
    let year = year as i64;
    let (month, day) = if year <= switch_year as i64 {
        julian_computus(year)
    } else {
        gregorian_computus(year)
    };
    EasterDate {
        month: month as u32,
        day: day as u32,
    }
}

fn julian_computus(year: i64) -> (i64, i64) {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15).rem_euclid(30);
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let n = d + e + 114;
    (n.div_euclid(31), n.rem_euclid(31) + 1)
}

fn gregorian_computus(year: i64) -> (i64, i64) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    (n.div_euclid(31), n.rem_euclid(31) + 1)
}

impl Converter {
    /// Easter of `year`, switching computus at the configured switch year.
    pub fn easter(&self, year: i32) -> EasterDate {
        easter_with_switch(year, self.rule().gregorian_change().year)
    }
}
