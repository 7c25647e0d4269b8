//! Conversion between civil dates and Julian days (Meeus 1991, ch. 7).
//!
//! A Julian day (JD) counts days continuously from noon UT of January 1,
//! 4713 BC (astronomical year -4712) in the proleptic Julian calendar. The
//! fractional part of a day carries the time of day, so midnight falls on
//! `.5`.

use std::fmt;

use crate::calendar::CalendarRule;
use crate::config::CalendarConfig;
use crate::error::{Error, Result};

/// Earliest year accepted by the forward conversion.
pub const MIN_YEAR: i32 = -4712;

/// Julian day of the modified Julian day epoch, 1858-11-17 0h.
pub const MJD_EPOCH: f64 = 2400000.5;

/// Keeps the year of the inverse conversion within `i32`.
const MAX_JULIAN_DAY: f64 = 7.0e11;

/// Rounds `value` to `digits` decimal places.
///
/// # Example
///
/// ```
/// use astrodato::julian_day::round_to;
///
/// assert_eq!(0.2, round_to(2447274.2 % 1.0, 8));
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// A date in the Julian or Gregorian calendar. The fractional part of `day`
/// is the time of day.
///
/// `year` is astronomical: 1 BC is `0`, 2 BC is `-1`, etc.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Converts between civil dates and Julian days.
///
/// Holds the calendar switch date and the output precision. Every
/// fractional result is rounded to that many decimal digits.
///
/// # Example
///
/// ```
/// use astrodato::Converter;
///
/// let conv = Converter::default();
/// let jd = conv.to_julian_day(2000, 1, 1.5).unwrap();
/// assert_eq!(2451545.0, jd);
///
/// let date = conv.to_civil_date(jd).unwrap();
/// assert_eq!((2000, 1, 1.5), (date.year, date.month, date.day));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Converter {
    rule: CalendarRule,
    decimal_digits: u32,
    /// Integral JD (at midnight + 0.5) of the first Gregorian day.
    gregorian_start: i64,
}

impl Converter {
    /// Builds a converter from a validated configuration.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: CalendarConfig) -> Self {
        let sw = config.gregorian_change;
        let gregorian_start = (day_number(sw.year, sw.month, sw.day as f64, false) + 0.5) as i64;
        Self {
            rule: CalendarRule::new(sw),
            decimal_digits: config.decimal_digits,
            gregorian_start,
        }
    }

    pub fn rule(&self) -> &CalendarRule {
        &self.rule
    }

    pub fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    /// Rounds to the configured number of decimal digits.
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimal_digits)
    }

    /// Julian day of a civil date, using the Julian calendar before the
    /// switch date and the Gregorian calendar from it on.
    ///
    /// `day` may be fractional. `year` and `month` are taken as reals so
    /// that fractional values can be reported; they must be whole.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedEpoch`] if `year` is before -4712
    /// - [`Error::NonIntegralField`] if `year` or `month` is fractional
    /// - [`Error::OutOfRange`] if `month` is not in `1..=12` or `day` is not
    ///   in `(0, 32)`
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// let conv = Converter::default();
    /// assert_eq!(2446822.5, conv.to_julian_day(1987, 1, 27).unwrap());
    /// assert_eq!(1356001.0, conv.to_julian_day(-1000, 7, 12.5).unwrap());
    /// assert!(conv.to_julian_day(1.2, 1, 1).is_err());
    /// ```
    pub fn to_julian_day(
        &self,
        year: impl Into<f64>,
        month: impl Into<f64>,
        day: impl Into<f64>,
    ) -> Result<f64> {
        self.to_julian_day_with(year, month, day, false)
    }

    /// Like [`Self::to_julian_day`], but `force_julian` reads the date in
    /// the Julian calendar even after the switch.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// let conv = Converter::default();
    /// // 1582-10-15 Gregorian follows 1582-10-04 Julian
    /// assert_eq!(2299160.5, conv.to_julian_day(1582, 10, 15).unwrap());
    /// assert_eq!(2299170.5, conv.to_julian_day_with(1582, 10, 15, true).unwrap());
    /// ```
    pub fn to_julian_day_with(
        &self,
        year: impl Into<f64>,
        month: impl Into<f64>,
        day: impl Into<f64>,
        force_julian: bool,
    ) -> Result<f64> {
        let (year, month, day) = (year.into(), month.into(), day.into());
        let (year, month) = validate_civil(year, month, day)?;

        let julian = force_julian || self.rule.is_julian_date(year, month, day);
        let jd = self.round(day_number(year, month, day, julian));
        log::trace!("{year}/{month}/{day} -> JD {jd}");
        Ok(jd)
    }

    /// Civil date of a Julian day, in the Julian calendar before the switch
    /// and the Gregorian calendar from it on.
    ///
    /// Only defined for non-negative Julian days.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::{CivilDate, Converter};
    ///
    /// let conv = Converter::default();
    /// assert_eq!(CivilDate::new(1957, 10, 4.81), conv.to_civil_date(2436116.31).unwrap());
    /// assert_eq!(CivilDate::new(333, 1, 27.5), conv.to_civil_date(1842713.0).unwrap());
    /// ```
    pub fn to_civil_date(&self, jd: f64) -> Result<CivilDate> {
        if jd.is_nan() || jd < 0.0 {
            return Err(Error::NegativeJulianDay(jd));
        }
        if jd > MAX_JULIAN_DAY {
            return Err(Error::OutOfRange {
                field: "julian day",
                value: jd,
            });
        }

        let shifted = jd + 0.5;
        let mut z = shifted.trunc() as i64;
        // `shifted - z` loses precision, hence the rounding
        let mut f = self.round(shifted.fract());
        if f >= 1.0 {
            z += 1;
            f -= 1.0;
        }

        let a = if z < self.gregorian_start {
            z
        } else {
            let alpha = ((z as f64 - 1867216.25) / 36524.25).trunc() as i64;
            z + 1 + alpha - alpha.div_euclid(4)
        };
        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25).trunc() as i64;
        let d = (365.25 * c as f64).trunc() as i64;
        let e = ((b - d) as f64 / 30.60001).trunc() as i64;

        let day = self.round((b - d - (30.60001 * e as f64).trunc() as i64) as f64 + f);
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };

        let date = CivilDate::new(year as i32, month as u32, day);
        log::trace!("JD {jd} -> {date}");
        Ok(date)
    }

    /// Modified Julian day, `jd - 2400000.5`.
    pub fn to_modified_julian_day(&self, jd: f64) -> f64 {
        jd - MJD_EPOCH
    }

    /// Julian day of day 0 of `year`, i.e. December 31 of the previous
    /// year (Meeus 1991, p. 62).
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// assert_eq!(2451543.5, Converter::default().jd0(2000).unwrap());
    /// ```
    pub fn jd0(&self, year: i32) -> Result<f64> {
        self.to_julian_day(year as f64 - 1.0, 12, 31)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::from_config(CalendarConfig::DEFAULT)
    }
}

/// Checks the coarse bounds of a civil date and returns the whole year and
/// month.
fn validate_civil(year: f64, month: f64, day: f64) -> Result<(i32, u32)> {
    if year < MIN_YEAR as f64 {
        return Err(Error::UnsupportedEpoch { year });
    }
    if year.fract() != 0.0 {
        return Err(Error::NonIntegralField {
            field: "year",
            value: year,
        });
    }
    if month.fract() != 0.0 {
        return Err(Error::NonIntegralField {
            field: "month",
            value: month,
        });
    }
    if year > i32::MAX as f64 {
        return Err(Error::OutOfRange {
            field: "year",
            value: year,
        });
    }
    if !(1.0..=12.0).contains(&month) {
        return Err(Error::OutOfRange {
            field: "month",
            value: month,
        });
    }
    if !(day > 0.0 && day < 32.0) {
        return Err(Error::OutOfRange {
            field: "day",
            value: day,
        });
    }
    Ok((year as i32, month as u32))
}

/// January and February count as months 13 and 14 of the previous year.
fn shift_january_february(year: i32, month: u32) -> (i32, u32) {
    if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    }
}

/// Meeus' formula, unrounded. The three integral terms are truncated before
/// the fractional day is added.
fn day_number(year: i32, month: u32, day: f64, julian: bool) -> f64 {
    let (y, m) = shift_january_february(year, month);
    let b = if julian {
        0
    } else {
        let a = (y as i64).div_euclid(100);
        2 - a + a.div_euclid(4)
    };
    let partial = (365.25 * (y as f64 + 4716.0)).trunc() as i64
        + (30.60001 * (m as f64 + 1.0)).trunc() as i64
        + b;
    partial as f64 + day - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarKind;
    use crate::config::SwitchDate;
    use crate::error::InvalidInputKind;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn known_julian_days() {
        let conv = Converter::default();
        for ((y, m, d), expected) in [
            ((2000, 1, 1.5), 2451545.0),
            ((1987, 1, 27.0), 2446822.5),
            ((1900, 1, 1.0), 2415020.5),
            ((1600, 1, 1.0), 2305447.5),
            ((-1000, 7, 12.5), 1356001.0),
            ((-4712, 1, 1.5), 0.0),
            ((1582, 10, 4.0), 2299159.5),
            ((1582, 10, 15.0), 2299160.5),
        ] {
            let jd = conv.to_julian_day(y, m, d).unwrap();
            assert_abs_diff_eq!(expected, jd, epsilon = 1e-7);
        }
    }

    #[test]
    fn rejects_invalid_input() {
        use InvalidInputKind::*;
        let conv = Converter::default();
        for ((y, m, d), kind) in [
            ((-4715.0, 1.0, 1.0), UnsupportedEpoch),
            ((1.2, 1.0, 1.0), NonIntegralField),
            ((1.0, 1.3, 1.0), NonIntegralField),
            ((1.0, 0.0, 1.0), OutOfRange),
            ((1.0, 1.0, 0.0), OutOfRange),
            ((1.0, -1.0, 1.0), OutOfRange),
            ((1.0, 1.0, -1.0), OutOfRange),
            ((1.0, 13.0, 1.0), OutOfRange),
            ((1.0, 1.0, 32.0), OutOfRange),
            ((1.0, 1.0, f64::NAN), OutOfRange),
            ((f64::NAN, 1.0, 1.0), NonIntegralField),
            ((1e10, 1.0, 1.0), OutOfRange),
        ] {
            let err = conv.to_julian_day(y, m, d).unwrap_err();
            assert_eq!(Some(kind), err.kind(), "{y}/{m}/{d}: {err}");
        }
    }

    #[test]
    fn accepts_end_of_day_31() {
        let conv = Converter::default();
        let jd = conv.to_julian_day(2000, 1, 31.99).unwrap();
        assert_abs_diff_eq!(2451575.49, jd, epsilon = 1e-7);
    }

    #[test]
    fn forced_julian() {
        let conv = Converter::default();
        assert_eq!(2451557.5, conv.to_julian_day_with(2000, 1, 1, true).unwrap());
        // No effect before the switch
        assert_eq!(
            conv.to_julian_day(1000, 3, 1).unwrap(),
            conv.to_julian_day_with(1000, 3, 1, true).unwrap()
        );
    }

    #[test]
    fn civil_dates() {
        let conv = Converter::default();
        for (jd, (y, m, d)) in [
            (2451545.0, (2000, 1, 1.5)),
            (2436116.31, (1957, 10, 4.81)),
            (1842713.0, (333, 1, 27.5)),
            (1507900.13, (-584, 5, 28.63)),
            (2299159.5, (1582, 10, 4.0)),
            (2299160.5, (1582, 10, 15.0)),
            (0.0, (-4712, 1, 1.5)),
        ] {
            let date = conv.to_civil_date(jd).unwrap();
            assert_eq!((y, m), (date.year, date.month), "JD {jd}");
            assert_abs_diff_eq!(d, date.day, epsilon = 1e-8);
        }
    }

    #[test]
    fn fraction_rounding_up_carries_into_next_day() {
        let conv = Converter::default();
        let date = conv.to_civil_date(2451544.499999999).unwrap();
        assert_eq!(CivilDate::new(2000, 1, 1.0), date);
    }

    #[test]
    fn rejects_negative_julian_day() {
        let conv = Converter::default();
        for jd in [-0.5, -1e9, f64::NAN] {
            let err = conv.to_civil_date(jd).unwrap_err();
            assert_eq!(Some(InvalidInputKind::UnsupportedEpoch), err.kind());
        }
        assert!(matches!(
            conv.to_civil_date(f64::INFINITY),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn modified_julian_day() {
        let conv = Converter::default();
        let jd = conv.to_julian_day(1858, 11, 17).unwrap();
        assert_eq!(0.0, conv.to_modified_julian_day(jd));
        assert_eq!(51544.5, conv.to_modified_julian_day(2451545.0));
    }

    #[test]
    fn julian_day_zero() {
        let conv = Converter::default();
        assert_eq!(2443508.5, conv.jd0(1978).unwrap());
        assert_eq!(conv.to_julian_day(1978, 1, 1).unwrap() - 1.0, conv.jd0(1978).unwrap());
        assert!(conv.jd0(-4712).is_err());
        assert!(matches!(
            conv.jd0(i32::MIN),
            Err(Error::UnsupportedEpoch { .. })
        ));
    }

    #[test]
    fn custom_switch_date() {
        let conv = Converter::new(CalendarConfig {
            gregorian_change: SwitchDate {
                year: 1752,
                month: 9,
                day: 14,
            },
            ..CalendarConfig::DEFAULT
        })
        .unwrap();
        let jd = conv.to_julian_day(1752, 9, 2).unwrap();
        assert_eq!(2361220.5, jd);
        assert_eq!(jd + 1.0, conv.to_julian_day(1752, 9, 14).unwrap());
        assert_eq!(
            CivilDate::new(1752, 9, 2.0),
            conv.to_civil_date(jd).unwrap()
        );
        assert_eq!(
            CivilDate::new(1752, 9, 14.0),
            conv.to_civil_date(jd + 1.0).unwrap()
        );
    }

    #[test]
    fn switch_in_february() {
        // 1918-01-31 Julian was followed by 1918-02-14 Gregorian
        let conv = Converter::new(CalendarConfig {
            gregorian_change: SwitchDate {
                year: 1918,
                month: 2,
                day: 14,
            },
            ..CalendarConfig::DEFAULT
        })
        .unwrap();
        let last_julian = conv.to_julian_day(1918, 1, 31).unwrap();
        let first_gregorian = conv.to_julian_day(1918, 2, 14).unwrap();
        assert_eq!(2421637.5, last_julian);
        assert_eq!(last_julian + 1.0, first_gregorian);

        for ((m, d), kind) in [
            ((1, 31), CalendarKind::Julian),
            ((2, 14), CalendarKind::Gregorian),
            ((2, 28), CalendarKind::Gregorian),
            ((3, 1), CalendarKind::Gregorian),
        ] {
            assert_eq!(kind, conv.rule().calendar_kind(1918, m, d as f64));
            let jd = conv.to_julian_day(1918, m, d).unwrap();
            assert_eq!(
                CivilDate::new(1918, m, d as f64),
                conv.to_civil_date(jd).unwrap(),
                "1918/{m}/{d}"
            );
        }
    }

    #[test]
    fn custom_precision() {
        let conv = Converter::new(CalendarConfig {
            decimal_digits: 2,
            ..CalendarConfig::DEFAULT
        })
        .unwrap();
        assert_eq!(2451545.12, conv.to_julian_day(2000, 1, 1.62345).unwrap());
        assert!(Converter::new(CalendarConfig {
            decimal_digits: 40,
            ..CalendarConfig::DEFAULT
        })
        .is_err());
    }

    #[test]
    fn rounding() {
        assert_eq!(0.2, round_to(0.19999999999, 8));
        assert_eq!(113.2, round_to(113.20000000001, 8));
        assert_eq!(-0.5, round_to(-0.500000001, 8));
    }

    /// Day numbers that exist in every month, avoiding the dropped days of
    /// October 1582.
    fn civil_date() -> impl Strategy<Value = (i32, u32, f64)> {
        (-4711..=3000i32, 1..=12u32, 1..=28u32, 0..100u32)
            .prop_filter("dropped by the calendar reform", |&(y, m, d, _)| {
                !(y == 1582 && m == 10 && (5..=14).contains(&d))
            })
            .prop_map(|(y, m, d, hundredths)| (y, m, d as f64 + hundredths as f64 / 100.0))
    }

    proptest! {
        #[test]
        fn prop_roundtrip(date in civil_date()) {
            let conv = Converter::default();
            let (y, m, d) = date;
            let jd = conv.to_julian_day(y, m, d).unwrap();
            let back = conv.to_civil_date(jd).unwrap();
            prop_assert_eq!((y, m), (back.year, back.month));
            prop_assert!((back.day - d).abs() < 1e-7, "{} != {}", back.day, d);
        }

        #[test]
        fn prop_monotonic(a in civil_date(), b in civil_date()) {
            let conv = Converter::default();
            let (lo, hi) = if (a.0, a.1) < (b.0, b.1) || ((a.0, a.1) == (b.0, b.1) && a.2 <= b.2) {
                (a, b)
            } else {
                (b, a)
            };
            let jd_lo = conv.to_julian_day(lo.0, lo.1, lo.2).unwrap();
            let jd_hi = conv.to_julian_day(hi.0, hi.1, hi.2).unwrap();
            if lo == hi {
                prop_assert_eq!(jd_lo, jd_hi);
            } else {
                prop_assert!(jd_lo < jd_hi, "{:?} -> {} vs {:?} -> {}", lo, jd_lo, hi, jd_hi);
            }
        }
    }
}
