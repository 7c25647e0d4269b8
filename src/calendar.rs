//! Julian/Gregorian boundary and leap years.

use std::fmt;

use crate::config::{GREGORIAN_CHANGE, SwitchDate};

/// Which calendar a civil date is expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CalendarKind {
    Julian,
    Gregorian,
}

impl CalendarKind {
    /// Returns `true` if `self` is `Julian`, otherwise `false`.
    pub fn is_julian(&self) -> bool {
        matches!(self, CalendarKind::Julian)
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalendarKind::Julian => "julian",
            CalendarKind::Gregorian => "gregorian",
        })
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Decides which calendar applies to a date, given a fixed switch date.
///
/// Dates strictly before the switch are Julian, the rest Gregorian. There is
/// no proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CalendarRule {
    gregorian_change: SwitchDate,
}

impl CalendarRule {
    pub const fn new(gregorian_change: SwitchDate) -> Self {
        Self { gregorian_change }
    }

    pub fn gregorian_change(&self) -> SwitchDate {
        self.gregorian_change
    }

    /// `true` iff `(year, month, day)` is strictly before the switch date,
    /// compared lexicographically.
    ///
    /// `month` is not range checked, so the shifted months 13 and 14 used
    /// for January and February of the following year compare correctly.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::CalendarRule;
    ///
    /// let rule = CalendarRule::default();
    /// assert!(rule.is_julian_date(1582, 10, 4.0));
    /// assert!(!rule.is_julian_date(1582, 10, 15.0));
    /// assert!(!rule.is_julian_date(2000, 1, 31.0));
    /// ```
    pub fn is_julian_date(&self, year: i32, month: u32, day: f64) -> bool {
        let SwitchDate {
            year: sy,
            month: sm,
            day: sd,
        } = self.gregorian_change;
        year < sy || (year == sy && (month < sm || (month == sm && day < sd as f64)))
    }

    /// Calendar used for the given date.
    pub fn calendar_kind(&self, year: i32, month: u32, day: f64) -> CalendarKind {
        if self.is_julian_date(year, month, day) {
            CalendarKind::Julian
        } else {
            CalendarKind::Gregorian
        }
    }

    /// Every fourth year is leap, except that after the switch year only
    /// every fourth century year is (Meeus 1991, p. 62).
    ///
    /// The century exception is not applied to years up to and including
    /// the switch year, so 1500 is leap and 1700 is not.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::CalendarRule;
    ///
    /// let rule = CalendarRule::default();
    /// assert!(rule.is_leap_year(1500));
    /// assert!(!rule.is_leap_year(1900));
    /// assert!(rule.is_leap_year(2000));
    /// ```
    pub fn is_leap_year(&self, year: i32) -> bool {
        if year > self.gregorian_change.year && year.rem_euclid(100) == 0 {
            year.rem_euclid(400) == 0
        } else {
            year.rem_euclid(4) == 0
        }
    }

    /// Like [`Self::is_leap_year`], as a [`YearType`].
    pub fn year_type(&self, year: i32) -> YearType {
        if self.is_leap_year(year) {
            YearType::Leap
        } else {
            YearType::Common
        }
    }
}

impl Default for CalendarRule {
    fn default() -> Self {
        Self::new(GREGORIAN_CHANGE)
    }
}
