//! Fuzz target: `Mq135` read path
//!
//! Drives arbitrary raw counts, temperatures and humidities through every
//! driver operation and asserts that nothing panics and every `Ok` value is
//! finite.
//!
//! cargo fuzz run fuzz_conversions

#![no_main]

use libfuzzer_sys::fuzz_target;
use mq135::adapters::fn_input::FnAnalogInput;
use mq135::{Gas, Mq135, SensorConfig};

fuzz_target!(|input: (u16, f32, f32, u8)| {
    let (raw, temperature, humidity, gas_idx) = input;
    let gas = Gas::ALL[usize::from(gas_idx) % Gas::ALL.len()];

    let Ok(mut sensor) = Mq135::new(FnAnalogInput::new(move |_: &u8| raw), 0, SensorConfig::default())
    else {
        return;
    };

    if let Ok(ppm) = sensor.gas_ppm_from_sensor(gas) {
        assert!(ppm.is_finite());
    }
    if let Ok(r) = sensor.corrected_resistance(temperature, humidity) {
        assert!(r.is_finite());
    }
    if let Ok(ppm) = sensor.calibrated_gas_ppm(gas, temperature, humidity) {
        assert!(ppm.is_finite());
    }
    if let Ok(snapshot) = sensor.read_all_compensated(temperature, humidity) {
        assert!(snapshot.all_finite());
    }
    if let Ok(cal) = sensor.calibrate_compensated(temperature, humidity) {
        assert!(cal.is_usable());
    }

    // Pure formulas must not panic on anything.
    let _ = sensor.gas_ppm(gas, f32::from(raw) - 512.0);
    let _ = sensor.correction_factor(temperature, humidity);
});
