//! Unified error types for the MQ135 driver.
//!
//! A single `Error` enum that both failure domains (reading the sensor,
//! loading a configuration) convert into. All variants are `Copy` so they
//! can be handed back from the read path without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level driver error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A reading could not be taken or produced an unusable value.
    Sensor(SensorError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The analog input returned an error.
    AdcReadFailed,
    /// Raw count of zero or above the ADC full scale.
    InvalidReading(u16),
    /// The temperature/humidity correction factor evaluated to zero.
    DivisionByZero,
    /// A derived resistance or concentration is NaN or infinite.
    NonFinite,
    /// A calibration baseline came out zero, negative or non-finite.
    DegenerateResistance,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcReadFailed => write!(f, "ADC read failed"),
            Self::InvalidReading(raw) => write!(f, "invalid raw reading {raw}"),
            Self::DivisionByZero => write!(f, "correction factor is zero"),
            Self::NonFinite => write!(f, "non-finite result"),
            Self::DegenerateResistance => write!(f, "calibration baseline must be finite and > 0"),
        }
    }
}

impl std::error::Error for SensorError {}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation.
    /// The `&'static str` names the field and the rule it broke.
    ValidationFailed(&'static str),
    /// The document could not be deserialised.
    Malformed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Malformed => write!(f, "malformed config document"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
