//! Closed-form conversions from ADC counts to gas concentrations.
//!
//! Plain IEEE-754 arithmetic with no checks: a zero count gives `+inf`
//! resistance, a non-positive resistance gives NaN ppm, a zero correction
//! factor gives `+inf` corrected resistance.  The [`Mq135`] driver layers
//! typed errors on top.
//!
//! [`Mq135`]: crate::sensors::mq135::Mq135

use crate::config::{CorrectionCoefficients, GasCurve};

/// Humidity (%RH) at which the cold-branch correction is neutral.
const REFERENCE_HUMIDITY_PCT: f32 = 33.0;

/// Temperature (°C) where the correction model switches branch.
/// This value belongs to the warm branch.
pub const BRANCH_TEMPERATURE_C: f32 = 20.0;

/// Sensor resistance (Ω) from a raw count on a divider with `load_ohms`.
///
/// `R = (full_scale / raw - 1) * load`
#[inline]
pub fn resistance_from_raw(raw: u16, full_scale: u16, load_ohms: f32) -> f32 {
    (f32::from(full_scale) / f32::from(raw) - 1.0) * load_ohms
}

/// Concentration (ppm) at `resistance` on `curve`.
#[inline]
pub fn ppm_from_resistance(curve: &GasCurve, resistance: f32) -> f32 {
    curve.scale_factor * (resistance / curve.r0).powf(-curve.exponent)
}

/// Baseline resistance at which `curve` reads its atmospheric reference
/// concentration, given the resistance measured in that atmosphere.
#[inline]
pub fn rzero_from_resistance(curve: &GasCurve, resistance: f32) -> f32 {
    resistance * (curve.atmospheric_ppm / curve.scale_factor).powf(1.0 / curve.exponent)
}

/// Temperature/humidity multiplier for the sensor resistance.
///
/// The two branches are independent fits and do not meet at 20 °C.
pub fn correction_factor(k: &CorrectionCoefficients, temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = temperature_c;
    let h = humidity_pct;
    if t < BRANCH_TEMPERATURE_C {
        k.a * t * t - k.b * t + k.c - (h - REFERENCE_HUMIDITY_PCT) * k.d
    } else {
        k.e * t + k.f * h + k.g
    }
}
