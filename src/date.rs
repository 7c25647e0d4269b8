//! Civil date bundled with its Julian day.

use std::fmt;
use std::io;
use std::ops::Sub;

use crate::calendar::CalendarKind;
use crate::error::Result;
use crate::julian_day::Converter;

/// A civil date with its Julian day computed once at construction.
///
/// All arithmetic is delegated to a [`Converter`].
///
/// # Example
///
/// ```
/// use astrodato::DateRecord;
///
/// let date = DateRecord::new(2012, 12, 31.4).unwrap();
/// assert_eq!(2456292.9, date.jd());
/// assert!(!date.calendar().is_julian());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DateRecord {
    year: i32,
    month: u32,
    day: f64,
    jd: f64,
    calendar: CalendarKind,
    converter: Converter,
}

impl DateRecord {
    /// Creates a `DateRecord` with the default calendar configuration.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. `day` may be fractional.
    pub fn new(year: i32, month: u32, day: f64) -> Result<Self> {
        Self::with_converter(Converter::default(), year, month, day)
    }

    /// Creates a `DateRecord` using `converter` for all calculations.
    pub fn with_converter(converter: Converter, year: i32, month: u32, day: f64) -> Result<Self> {
        let jd = converter.to_julian_day(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            jd,
            calendar: converter.rule().calendar_kind(year, month, day),
            converter,
        })
    }

    /// Creates a `DateRecord` for a Julian day.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::DateRecord;
    ///
    /// let date = DateRecord::from_jd(2451545.0).unwrap();
    /// assert_eq!((2000, 1, 1.5), (date.year(), date.month(), date.day()));
    /// ```
    pub fn from_jd(jd: f64) -> Result<Self> {
        let converter = Converter::default();
        let date = converter.to_civil_date(jd)?;
        Self::with_converter(converter, date.year, date.month, date.day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> f64 {
        self.day
    }
    /// Returns the Julian day (JD) of the date.
    pub fn jd(&self) -> f64 {
        self.jd
    }
    /// Returns the modified Julian day (MJD) of the date.
    pub fn mjd(&self) -> f64 {
        self.converter.to_modified_julian_day(self.jd)
    }
    /// Calendar the date is expressed in.
    pub fn calendar(&self) -> CalendarKind {
        self.calendar
    }
    /// Returns the day of week, `0` for Sunday through `6` for Saturday.
    pub fn weekday(&self) -> u32 {
        self.converter.weekday(self.jd)
    }
    /// Returns the day of the year, January 1 being 1.
    pub fn year_day(&self) -> Result<f64> {
        self.converter.year_day(self.year, self.month, self.day)
    }

    /// Writes a summary of the date. Julian days always show a decimal
    /// point.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::DateRecord;
    ///
    /// let mut out = Vec::new();
    /// DateRecord::new(1858, 11, 17.0).unwrap().report(&mut out).unwrap();
    /// assert_eq!(
    ///     "year/month/day      1858/11/17 (gregorian)\n\
    ///      julian day          2400000.5 JD\n\
    ///      modified julian day 0.0 MJD\n",
    ///     String::from_utf8(out).unwrap(),
    /// );
    /// ```
    pub fn report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "year/month/day      {} ({})", self, self.calendar)?;
        writeln!(out, "julian day          {:?} JD", self.jd)?;
        writeln!(out, "modified julian day {:?} MJD", self.mjd())
    }
}

impl fmt::Display for DateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

impl Sub<DateRecord> for DateRecord {
    type Output = f64;
    fn sub(self, rhs: DateRecord) -> Self::Output {
        self.converter.round(self.jd - rhs.jd)
    }
}
