//! Sensor configuration parameters
//!
//! All calibration constants for one MQ135 instance: the divider load
//! resistor, the ADC full scale, a power-law curve per gas and the
//! temperature/humidity correction coefficients. A config is built once,
//! validated, and handed to the driver by value; the driver never mutates it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gas::Gas;
use crate::sensors::Calibration;

/// Power-law fit for one gas: `ppm = scale_factor * (Rs / r0) ^ -exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasCurve {
    /// Multiplier of the curve fit (ppm at `Rs == r0`).
    pub scale_factor: f32,
    /// Positive slope of the log-log fit; applied negated.
    pub exponent: f32,
    /// Typical clean-air concentration (ppm) used as the calibration target.
    pub atmospheric_ppm: f32,
    /// Calibration baseline resistance in Ohms.
    pub r0: f32,
}

impl GasCurve {
    pub const fn new(scale_factor: f32, exponent: f32, atmospheric_ppm: f32, r0: f32) -> Self {
        Self {
            scale_factor,
            exponent,
            atmospheric_ppm,
            r0,
        }
    }
}

/// One [`GasCurve`] per supported gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasCurves {
    pub co: GasCurve,
    pub co2: GasCurve,
    pub ethanol: GasCurve,
    pub nh4: GasCurve,
    pub toluene: GasCurve,
    pub acetone: GasCurve,
}

impl GasCurves {
    pub fn get(&self, gas: Gas) -> &GasCurve {
        match gas {
            Gas::Co => &self.co,
            Gas::Co2 => &self.co2,
            Gas::Ethanol => &self.ethanol,
            Gas::Nh4 => &self.nh4,
            Gas::Toluene => &self.toluene,
            Gas::Acetone => &self.acetone,
        }
    }

    fn get_mut(&mut self, gas: Gas) -> &mut GasCurve {
        match gas {
            Gas::Co => &mut self.co,
            Gas::Co2 => &mut self.co2,
            Gas::Ethanol => &mut self.ethanol,
            Gas::Nh4 => &mut self.nh4,
            Gas::Toluene => &mut self.toluene,
            Gas::Acetone => &mut self.acetone,
        }
    }
}

/// Uncalibrated baseline resistance shared by every gas until a clean-air
/// calibration replaces it.
const DEFAULT_R0_OHMS: f32 = 76_630.0;

impl Default for GasCurves {
    fn default() -> Self {
        // Exponential regressions of the datasheet sensitivity curves.
        Self {
            co: GasCurve::new(605.18, 3.937, 1.0, DEFAULT_R0_OHMS),
            co2: GasCurve::new(110.47, 2.862, 407.57, DEFAULT_R0_OHMS),
            ethanol: GasCurve::new(77.255, 3.18, 22.5, DEFAULT_R0_OHMS),
            nh4: GasCurve::new(102.2, 2.473, 15.0, DEFAULT_R0_OHMS),
            toluene: GasCurve::new(44.947, 3.445, 2.9, DEFAULT_R0_OHMS),
            acetone: GasCurve::new(34.668, 3.369, 16.0, DEFAULT_R0_OHMS),
        }
    }
}

/// Coefficients of the two-branch temperature/humidity model.
///
/// Below 20 °C: `a*t² - b*t + c - (h - 33)*d`.
/// At or above 20 °C: `e*t + f*h + g`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
    pub g: f32,
}

impl Default for CorrectionCoefficients {
    fn default() -> Self {
        Self {
            a: 0.000_35,
            b: 0.027_18,
            c: 1.395_38,
            d: 0.001_8,
            e: -0.003_333_333,
            f: -0.001_923_077,
            g: 1.130_128_2,
        }
    }
}

/// Complete configuration of one sensor instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    // --- Circuit ---
    /// Divider load resistance in Ohms.
    pub load_resistance_ohms: f32,
    /// Largest count the ADC returns (1023 for 10-bit, 4095 for 12-bit).
    pub adc_full_scale: u16,

    // --- Curves ---
    pub curves: GasCurves,
    pub correction: CorrectionCoefficients,

    // --- Sampling ---
    /// Raw reads before the heater is considered stable.
    pub warmup_reads: u32,
    /// Resistance samples averaged by `read_resistance_averaged`.
    pub samples_per_read: u8,
    /// Pause between averaged samples (milliseconds).
    pub sample_interval_ms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            load_resistance_ohms: 10_000.0,
            adc_full_scale: 1023,

            curves: GasCurves::default(),
            correction: CorrectionCoefficients::default(),

            warmup_reads: 600, // 10 min at 1 Hz
            samples_per_read: 4,
            sample_interval_ms: 50,
        }
    }
}

impl SensorConfig {
    /// Curve fit for `gas`.
    pub fn curve(&self, gas: Gas) -> &GasCurve {
        self.curves.get(gas)
    }

    /// Copy of this config with `gas`'s baseline resistance replaced.
    #[must_use]
    pub fn with_r0(mut self, gas: Gas, r0: f32) -> Self {
        self.curves.get_mut(gas).r0 = r0;
        self
    }

    /// Copy of this config with every baseline taken from `calibration`.
    #[must_use]
    pub fn with_calibration(&self, calibration: &Calibration) -> Self {
        Gas::ALL
            .iter()
            .fold(*self, |cfg, &gas| cfg.with_r0(gas, calibration.rzero(gas)))
    }

    /// Parse a JSON document and validate it.  Missing fields fall back to
    /// their defaults.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(doc).map_err(|e| {
            log::warn!("config: JSON rejected: {}", e);
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the conversion formulas cannot work with.  Nothing is
    /// clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.load_resistance_ohms.is_finite() && self.load_resistance_ohms > 0.0) {
            return Err(ConfigError::ValidationFailed("load_resistance_ohms must be > 0"));
        }
        if self.adc_full_scale == 0 {
            return Err(ConfigError::ValidationFailed("adc_full_scale must be > 0"));
        }
        if self.samples_per_read == 0 {
            return Err(ConfigError::ValidationFailed("samples_per_read must be > 0"));
        }

        for gas in Gas::ALL {
            let curve = self.curve(gas);
            let rule = if !(curve.scale_factor.is_finite() && curve.scale_factor > 0.0) {
                Some("curve scale_factor must be > 0")
            } else if !curve.exponent.is_finite() || curve.exponent == 0.0 {
                Some("curve exponent must be finite and non-zero")
            } else if !(curve.atmospheric_ppm.is_finite() && curve.atmospheric_ppm > 0.0) {
                Some("curve atmospheric_ppm must be > 0")
            } else if !(curve.r0.is_finite() && curve.r0 > 0.0) {
                Some("curve r0 must be > 0")
            } else {
                None
            };
            if let Some(rule) = rule {
                log::warn!("config: {} {}", gas, rule);
                return Err(ConfigError::ValidationFailed(rule));
            }
        }

        let c = &self.correction;
        if [c.a, c.b, c.c, c.d, c.e, c.f, c.g].iter().any(|k| !k.is_finite()) {
            return Err(ConfigError::ValidationFailed("correction coefficients must be finite"));
        }
        Ok(())
    }
}
