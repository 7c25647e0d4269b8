//! Calendar parameters: the Julian to Gregorian switch date and the output
//! rounding precision.
//!
//! Both are plain values bound into a [`Converter`](crate::Converter) when
//! it is built, so differently configured converters can coexist.
//!
//! # Example
//!
//! ```
//! use astrodato::CalendarConfig;
//!
//! let config = CalendarConfig::from_toml_str(
//!     r#"
//!     decimal_digits = 6
//!
//!     [gregorian_change]
//!     year = 1752
//!     month = 9
//!     day = 14
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(1752, config.gregorian_change.year);
//! assert_eq!(6, config.decimal_digits);
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// First day of the Gregorian calendar, 1582-10-15 (following 1582-10-04 in
/// the Julian calendar).
///
/// Countries adopted the reform at different dates; this is the generic one
/// (Meeus 1991, p. 59).
pub const GREGORIAN_CHANGE: SwitchDate = SwitchDate {
    year: 1582,
    month: 10,
    day: 15,
};

/// Decimal digits kept in fractional results, enough to hide binary
/// representation error when taking the fractional part of a day.
pub const DECIMAL_DIGITS: u32 = 8;

/// An f64 holds about 16 significant digits, seven of which a JDN already
/// uses for the integral part.
const MAX_DECIMAL_DIGITS: u32 = 9;

/// The first date counted in the Gregorian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SwitchDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for SwitchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parameters of a [`Converter`](crate::Converter).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub gregorian_change: SwitchDate,
    pub decimal_digits: u32,
}

impl CalendarConfig {
    /// The documented defaults, [`GREGORIAN_CHANGE`] and [`DECIMAL_DIGITS`].
    pub const DEFAULT: CalendarConfig = CalendarConfig {
        gregorian_change: GREGORIAN_CHANGE,
        decimal_digits: DECIMAL_DIGITS,
    };

    /// Parses and validates a TOML document. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: CalendarConfig = toml::from_str(s)?;
        config.validate()?;
        log::debug!(
            "loaded calendar config: switch {}, {} decimal digits",
            config.gregorian_change,
            config.decimal_digits
        );
        Ok(config)
    }

    /// Reads a TOML configuration file, see [`Self::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading calendar config from {}", path.display());
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Checks that the switch date and precision are usable.
    pub fn validate(&self) -> Result<()> {
        let SwitchDate { year, month, day } = self.gregorian_change;
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidConfig(format!(
                "gregorian_change month {month} not in 1..=12"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidConfig(format!(
                "gregorian_change day {day} not in 1..=31"
            )));
        }
        if year < -4712 {
            return Err(Error::InvalidConfig(format!(
                "gregorian_change year {year} before -4712"
            )));
        }
        if self.decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(Error::InvalidConfig(format!(
                "decimal_digits {} exceeds {MAX_DECIMAL_DIGITS}",
                self.decimal_digits
            )));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
