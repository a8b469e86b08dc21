//! MQ135 gas sensor driver.
//!
//! Converts the sensor's divider reading into resistance, then into ppm
//! estimates for CO, CO2, ethanol, NH4, toluene and acetone through per-gas
//! power-law fits, with optional temperature/humidity compensation.
//!
//! ```text
//!   AnalogInput ──▶ Mq135 ──▶ model (pure formulas) ──▶ GasSnapshot ──▶ ReadingSink
//!                     ▲
//!                SensorConfig
//! ```
//!
//! Everything except the ESP-IDF adapter builds and tests on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod gas;
pub mod model;
pub mod ports;
pub mod sensors;

mod error;

pub use config::{CorrectionCoefficients, GasCurve, GasCurves, SensorConfig};
pub use error::{ConfigError, Error, Result, SensorError};
pub use gas::Gas;
pub use sensors::mq135::Mq135;
pub use sensors::{Calibration, GasReading, GasSnapshot};
