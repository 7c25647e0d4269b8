//! Calendar arithmetic for astronomy, following Jean Meeus, *Astronomical
//! Algorithms* (Willmann-Bell, 1991).
//!
//! Converts civil dates in the Julian or Gregorian calendar to Julian days
//! and back, and derives the modified Julian day, the day of week, the day
//! of the year and the date of Easter. Dates before 1582-10-15 are read in
//! the Julian calendar, later ones in the Gregorian calendar.
//!
//! Fractional results are rounded to 8 decimal digits, so that e.g. the
//! fraction of a day reads back exactly as it was given.
//!
//! # Examples
//!
//! Basic usage with [`Converter`]:
//!
//! ```
//! use astrodato::Converter;
//!
//! let conv = Converter::default();
//! let jd = conv.to_julian_day(1987, 6, 19.5).unwrap();
//!
//! assert_eq!(2446966.0, jd);
//! assert_eq!(5, conv.weekday(jd)); // Friday
//! assert_eq!((4, 19), astrodato::easter(1992).month_day());
//! ```
//!
//! A date bundled with its Julian day:
//!
//! ```
//! use astrodato::{CalendarKind, DateRecord};
//!
//! let date = DateRecord::new(837, 4, 10.3).unwrap();
//!
//! assert_eq!(2026871.8, date.jd());
//! assert_eq!(CalendarKind::Julian, date.calendar());
//! ```
//!
//! All functions are pure; a [`Converter`] only carries its
//! [`CalendarConfig`], so it can be shared freely between threads.

pub mod calendar;
pub mod config;
pub mod date;
mod derived;
pub mod easter;
pub mod error;
pub mod julian_day;

pub use calendar::{CalendarKind, CalendarRule, YearType};
pub use config::{CalendarConfig, DECIMAL_DIGITS, GREGORIAN_CHANGE, SwitchDate};
pub use date::DateRecord;
pub use easter::{EasterDate, easter, easter_with_switch};
pub use error::{Error, InvalidInputKind, Result};
pub use julian_day::{CivilDate, Converter, MJD_EPOCH};
