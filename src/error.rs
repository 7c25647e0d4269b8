//! Errors reported by the conversion functions.

use thiserror::Error;

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of rejected input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InvalidInputKind {
    /// The date or day number lies before the supported epoch.
    UnsupportedEpoch,
    /// A field that must be whole has a fractional part.
    NonIntegralField,
    /// A field lies outside its allowed range.
    OutOfRange,
}

/// Errors that can occur when converting dates.
#[derive(Error, Debug)]
pub enum Error {
    /// Forward conversion of a year before -4712.
    #[error("julian day before year -4712 not supported (year {year})")]
    UnsupportedEpoch { year: f64 },

    /// Inverse conversion of a negative Julian day.
    #[error("negative julian day not supported ({0})")]
    NegativeJulianDay(f64),

    #[error("{field} can't be fractional ({value})")]
    NonIntegralField { field: &'static str, value: f64 },

    #[error("{field} out of range ({value})")]
    OutOfRange { field: &'static str, value: f64 },

    /// Malformed configuration document.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration that parses but cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classifies an input error, `None` for configuration and I/O errors.
    ///
    /// # Example
    ///
    /// ```
    /// use astrodato::{Converter, InvalidInputKind};
    ///
    /// let err = Converter::default().to_julian_day(1, 0, 1).unwrap_err();
    /// assert_eq!(Some(InvalidInputKind::OutOfRange), err.kind());
    /// ```
    pub fn kind(&self) -> Option<InvalidInputKind> {
        use InvalidInputKind::*;
        match self {
            Error::UnsupportedEpoch { .. } | Error::NegativeJulianDay(_) => Some(UnsupportedEpoch),
            Error::NonIntegralField { .. } => Some(NonIntegralField),
            Error::OutOfRange { .. } => Some(OutOfRange),
            Error::Config(_) | Error::InvalidConfig(_) | Error::Io(_) => None,
        }
    }

    /// Returns `true` for any rejected conversion input.
    pub fn is_invalid_input(&self) -> bool {
        self.kind().is_some()
    }
}
