//! MQ135 metal-oxide gas sensor driver.
//!
//! Reads the divider voltage through an [`AnalogInput`], converts it to
//! sensor resistance and evaluates the per-gas power-law fits held in the
//! [`SensorConfig`].  Temperature/humidity compensation divides the
//! resistance by the two-branch correction factor before the fit is applied.
//!
//! The formula methods (`gas_ppm`, `rzero`, `correction_factor`,
//! `corrected_rzero`) are pure and keep IEEE-754 semantics.  Everything that
//! touches the ADC returns a [`Result`] and reports degenerate values as
//! [`SensorError`]s instead of passing infinities on.

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::{GasCurve, SensorConfig};
use crate::error::{Result, SensorError};
use crate::gas::Gas;
use crate::model;
use crate::ports::AnalogInput;
use crate::sensors::{Calibration, GasSnapshot};

pub struct Mq135<A: AnalogInput> {
    adc: A,
    pin: A::Pin,
    config: SensorConfig,
    total_reads: u32,
}

impl<A: AnalogInput> Mq135<A> {
    /// Build a driver on `pin` of `adc`.  The config is validated once here.
    pub fn new(adc: A, pin: A::Pin, config: SensorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            adc,
            pin,
            config,
            total_reads: 0,
        })
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn pin(&self) -> &A::Pin {
        &self.pin
    }

    /// Give back the analog input and pin.
    pub fn release(self) -> (A, A::Pin) {
        (self.adc, self.pin)
    }

    pub fn total_reads(&self) -> u32 {
        self.total_reads
    }

    /// True once the heater has been powered for `warmup_reads` reads.
    pub fn is_warmed_up(&self) -> bool {
        self.total_reads >= self.config.warmup_reads
    }

    // ── ADC side ──────────────────────────────────────────────

    /// One raw count, rejected if zero or above full scale.  Only accepted
    /// counts advance the warm-up counter.
    pub fn read_raw(&mut self) -> Result<u16> {
        let raw = self.adc.read_raw(&self.pin).inspect_err(|e| {
            warn!("mq135: ADC read failed: {}", e);
        })?;

        if raw == 0 || raw > self.config.adc_full_scale {
            warn!(
                "mq135: rejected raw reading {} (full scale {})",
                raw, self.config.adc_full_scale
            );
            return Err(SensorError::InvalidReading(raw).into());
        }

        self.total_reads = self.total_reads.saturating_add(1);
        if self.total_reads == self.config.warmup_reads {
            info!("mq135: warm-up complete after {} reads", self.total_reads);
        }
        Ok(raw)
    }

    /// Sensor resistance in Ohms from one ADC read.
    pub fn read_resistance(&mut self) -> Result<f32> {
        let raw = self.read_raw()?;
        let resistance = model::resistance_from_raw(
            raw,
            self.config.adc_full_scale,
            self.config.load_resistance_ohms,
        );
        debug!(
            "mq135: raw={} R={:.0}\u{2126}{}",
            raw,
            resistance,
            if self.is_warmed_up() { "" } else { " (warming up)" }
        );
        Ok(resistance)
    }

    /// Mean resistance over `samples_per_read` reads spaced by
    /// `sample_interval_ms`.  Any failed read aborts the whole sample.
    pub fn read_resistance_averaged<D: DelayNs>(&mut self, delay: &mut D) -> Result<f32> {
        let samples = self.config.samples_per_read;
        let mut sum = 0.0_f32;
        for i in 0..samples {
            if i > 0 {
                delay.delay_ms(self.config.sample_interval_ms);
            }
            sum += self.read_resistance()?;
        }
        Ok(sum / f32::from(samples))
    }

    /// Resistance divided by the correction factor for `t`/`h`.
    pub fn corrected_resistance(&mut self, temperature_c: f32, humidity_pct: f32) -> Result<f32> {
        let factor = self.correction_factor(temperature_c, humidity_pct);
        if factor == 0.0 {
            warn!(
                "mq135: correction factor is zero at {:.1}\u{00b0}C/{:.0}%",
                temperature_c, humidity_pct
            );
            return Err(SensorError::DivisionByZero.into());
        }
        finite(self.read_resistance()? / factor)
    }

    pub fn gas_ppm_from_sensor(&mut self, gas: Gas) -> Result<f32> {
        let resistance = self.read_resistance()?;
        finite(self.gas_ppm(gas, resistance))
    }

    /// Concentration on the corrected resistance against the configured
    /// baseline.
    pub fn compensated_gas_ppm(&mut self, gas: Gas, temperature_c: f32, humidity_pct: f32) -> Result<f32> {
        let corrected = self.corrected_resistance(temperature_c, humidity_pct)?;
        finite(self.gas_ppm(gas, corrected))
    }

    /// Concentration with the baseline re-derived from the same corrected
    /// resistance it is applied to.
    ///
    /// The resistance is read once.  Because the baseline comes from the
    /// reading itself, the result is the gas's atmospheric reference level
    /// up to rounding; use [`compensated_gas_ppm`](Self::compensated_gas_ppm)
    /// for a compensated measurement.
    pub fn calibrated_gas_ppm(&mut self, gas: Gas, temperature_c: f32, humidity_pct: f32) -> Result<f32> {
        let corrected = self.corrected_resistance(temperature_c, humidity_pct)?;
        let curve = GasCurve {
            r0: self.corrected_rzero(gas, corrected),
            ..*self.config.curve(gas)
        };
        finite(model::ppm_from_resistance(&curve, corrected))
    }

    /// All gases from one resistance read.
    pub fn read_all(&mut self) -> Result<GasSnapshot> {
        let resistance = self.read_resistance()?;
        self.snapshot(resistance)
    }

    /// All gases from one compensated resistance read.
    pub fn read_all_compensated(&mut self, temperature_c: f32, humidity_pct: f32) -> Result<GasSnapshot> {
        let corrected = self.corrected_resistance(temperature_c, humidity_pct)?;
        self.snapshot(corrected)
    }

    /// Every gas at a resistance obtained elsewhere (e.g. an averaged
    /// read), rejected with `NonFinite` if any value is NaN or infinite.
    pub fn snapshot(&self, resistance: f32) -> Result<GasSnapshot> {
        let snapshot = GasSnapshot::from_resistance(&self.config, resistance);
        if snapshot.all_finite() {
            Ok(snapshot)
        } else {
            Err(SensorError::NonFinite.into())
        }
    }

    /// Measure the clean-air baseline of every gas.  Run with the sensor in
    /// fresh outdoor air after warm-up.
    pub fn calibrate(&mut self) -> Result<Calibration> {
        let resistance = self.read_resistance()?;
        let cal = Calibration::from_resistance(&self.config, resistance);
        self.accept_calibration(cal)
    }

    /// Clean-air baseline from the temperature/humidity corrected resistance.
    pub fn calibrate_compensated(&mut self, temperature_c: f32, humidity_pct: f32) -> Result<Calibration> {
        let corrected = self.corrected_resistance(temperature_c, humidity_pct)?;
        let cal = Calibration::from_fn(|gas| self.corrected_rzero(gas, corrected));
        self.accept_calibration(cal)
    }

    /// Refuse baselines `SensorConfig::validate` would reject.
    fn accept_calibration(&self, cal: Calibration) -> Result<Calibration> {
        if !cal.is_usable() {
            warn!("mq135: calibration rejected, baseline not finite and > 0");
            return Err(SensorError::DegenerateResistance.into());
        }
        if !self.is_warmed_up() {
            warn!("mq135: calibrating before warm-up, baselines will drift");
        }
        for (gas, rzero) in cal.iter() {
            info!("mq135: RZero {} = {:.0}\u{2126}", gas, rzero);
        }
        Ok(cal)
    }

    // ── Pure formulas ─────────────────────────────────────────

    /// `scale * (resistance / r0) ^ -exponent` for `gas`.
    pub fn gas_ppm(&self, gas: Gas, resistance: f32) -> f32 {
        model::ppm_from_resistance(self.config.curve(gas), resistance)
    }

    /// Baseline at which `gas` reads its atmospheric level for `resistance`.
    pub fn rzero(&self, gas: Gas, resistance: f32) -> f32 {
        model::rzero_from_resistance(self.config.curve(gas), resistance)
    }

    /// Same as [`rzero`](Self::rzero) for a resistance that has already
    /// been temperature/humidity corrected.
    pub fn corrected_rzero(&self, gas: Gas, corrected_resistance: f32) -> f32 {
        model::rzero_from_resistance(self.config.curve(gas), corrected_resistance)
    }

    pub fn correction_factor(&self, temperature_c: f32, humidity_pct: f32) -> f32 {
        model::correction_factor(&self.config.correction, temperature_c, humidity_pct)
    }
}

fn finite(value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SensorError::NonFinite.into())
    }
}
