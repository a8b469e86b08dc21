//! Sensor subsystem — the [`Mq135`](mq135::Mq135) driver and the value
//! types it produces.
//!
//! A [`GasSnapshot`] is built from ONE resistance read, so every gas in it
//! describes the same instant.

pub mod filter;
pub mod mq135;

use crate::config::SensorConfig;
use crate::gas::Gas;
use crate::model;

/// Concentration estimate for one gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReading {
    pub gas: Gas,
    pub ppm: f32,
}

/// Every gas evaluated against a single resistance read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasSnapshot {
    /// Resistance (Ω) the readings were derived from.
    pub resistance_ohms: f32,
    /// Readings in [`Gas::ALL`] order.
    pub readings: [GasReading; 6],
}

impl GasSnapshot {
    /// Apply every curve in `config` to `resistance_ohms`.
    pub fn from_resistance(config: &SensorConfig, resistance_ohms: f32) -> Self {
        let readings = Gas::ALL.map(|gas| GasReading {
            gas,
            ppm: model::ppm_from_resistance(config.curve(gas), resistance_ohms),
        });
        Self {
            resistance_ohms,
            readings,
        }
    }

    pub fn ppm(&self, gas: Gas) -> f32 {
        self.readings[gas.index()].ppm
    }

    pub fn iter(&self) -> impl Iterator<Item = &GasReading> {
        self.readings.iter()
    }

    pub fn all_finite(&self) -> bool {
        self.resistance_ohms.is_finite() && self.readings.iter().all(|r| r.ppm.is_finite())
    }
}

/// Clean-air baseline resistance per gas, measured in one pass.
///
/// Apply with [`SensorConfig::with_calibration`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    rzero: [f32; 6],
}

impl Calibration {
    pub fn from_fn(mut f: impl FnMut(Gas) -> f32) -> Self {
        Self {
            rzero: Gas::ALL.map(&mut f),
        }
    }

    /// RZero of every curve in `config` for a resistance measured in clean air.
    pub fn from_resistance(config: &SensorConfig, resistance_ohms: f32) -> Self {
        Self::from_fn(|gas| model::rzero_from_resistance(config.curve(gas), resistance_ohms))
    }

    pub fn rzero(&self, gas: Gas) -> f32 {
        self.rzero[gas.index()]
    }

    /// Every baseline finite and > 0, i.e. safe to pass to
    /// [`SensorConfig::with_calibration`].
    pub fn is_usable(&self) -> bool {
        self.rzero.iter().all(|r| r.is_finite() && *r > 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gas, f32)> + '_ {
        Gas::ALL.iter().map(|&gas| (gas, self.rzero(gas)))
    }
}
