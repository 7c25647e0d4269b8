//! Quantities derived from the Julian day: weekday, day of the year and
//! modified Julian day.

use crate::error::Result;
use crate::julian_day::Converter;

impl Converter {
    /// Day of week of a Julian day, `0` for Sunday through `6` for Saturday.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// let conv = Converter::default();
    /// assert_eq!(6, conv.weekday(2451545.0)); // 2000-01-01, Saturday
    /// ```
    pub fn weekday(&self, jd: f64) -> u32 {
        ((jd + 1.5).floor() as i64).rem_euclid(7) as u32
    }

    /// Day of week of a civil date, see [`Self::weekday`].
    pub fn weekday_of(
        &self,
        year: impl Into<f64>,
        month: impl Into<f64>,
        day: impl Into<f64>,
    ) -> Result<u32> {
        Ok(self.weekday(self.to_julian_day(year, month, day)?))
    }

    /// Modified Julian day of a civil date.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// assert_eq!(0.0, Converter::default().modified_julian_day_of(1858, 11, 17).unwrap());
    /// ```
    pub fn modified_julian_day_of(
        &self,
        year: impl Into<f64>,
        month: impl Into<f64>,
        day: impl Into<f64>,
    ) -> Result<f64> {
        Ok(self.to_modified_julian_day(self.to_julian_day(year, month, day)?))
    }

    /// Day of the year, January 1 being day 1. The fraction of `day` is
    /// kept.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// let conv = Converter::default();
    /// assert_eq!(318.0, conv.year_day(1978, 11, 14).unwrap());
    /// assert_eq!(113.2, conv.year_day(1988, 4, 22.2).unwrap());
    /// ```
    pub fn year_day(
        &self,
        year: impl Into<f64>,
        month: impl Into<f64>,
        day: impl Into<f64>,
    ) -> Result<f64> {
        let year = year.into();
        let jd = self.to_julian_day(year, month, day)?;
        let jan1 = self.to_julian_day(year, 1, 1)?;
        Ok(self.round(jd - jan1 + 1.0))
    }

    /// Month and day of the `year_day`th day of `year`, the inverse of
    /// [`Self::year_day`].
    ///
    /// A `year_day` past the end of the year lands in the following year;
    /// only the month and day are returned.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::Converter;
    ///
    /// let conv = Converter::default();
    /// assert_eq!((11, 14.0), conv.month_day(1978, 318.0).unwrap());
    /// assert_eq!((4, 22.2), conv.month_day(1988, 113.2).unwrap());
    /// ```
    pub fn month_day(&self, year: impl Into<f64>, year_day: f64) -> Result<(u32, f64)> {
        let year = year.into();
        let jd = self.to_julian_day(year, 1, 1)? + year_day - 1.0;
        let date = self.to_civil_date(jd)?;
        if date.year as f64 != year {
            log::debug!("day {year_day} of {year} falls in {}", date.year);
        }
        Ok((date.month, date.day))
    }
}
