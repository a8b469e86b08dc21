//! Integration tests for clean-air calibration and compensation.

use mq135::{Error, Gas, Mq135, SensorConfig, SensorError};

use super::mock_hw::ScriptedAdc;

fn within(value: f32, target: f32, rel: f32) -> bool {
    (value - target).abs() / target.abs() < rel
}

#[test]
fn clean_air_calibration_recenters_every_gas() {
    let base = SensorConfig::default();
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[180]), 0, base).unwrap();
    let cal = sensor.calibrate().unwrap();

    let tuned = base.with_calibration(&cal);
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[180, 400]), 0, tuned).unwrap();

    let clean = sensor.read_all().unwrap();
    for gas in Gas::ALL {
        let atm = tuned.curve(gas).atmospheric_ppm;
        assert!(within(clean.ppm(gas), atm, 1e-3), "{gas}: {}", clean.ppm(gas));
    }

    // A dirtier sample (lower resistance) reads above the clean-air level.
    let dirty = sensor.read_all().unwrap();
    for gas in Gas::ALL {
        assert!(dirty.ppm(gas) > clean.ppm(gas), "{gas}");
    }
}

#[test]
fn compensated_calibration_matches_compensated_reading() {
    let (t, h) = (12.0, 55.0);
    let base = SensorConfig::default();
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[220]), 0, base).unwrap();
    let cal = sensor.calibrate_compensated(t, h).unwrap();

    let tuned = base.with_calibration(&cal);
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[220]), 0, tuned).unwrap();
    let ppm = sensor.compensated_gas_ppm(Gas::Co2, t, h).unwrap();
    assert!(within(ppm, tuned.curve(Gas::Co2).atmospheric_ppm, 1e-3), "{ppm}");
}

#[test]
fn calibration_propagates_invalid_reading() {
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[0]), 0, SensorConfig::default()).unwrap();
    assert_eq!(
        sensor.calibrate(),
        Err(Error::Sensor(SensorError::InvalidReading(0)))
    );
}

#[test]
fn full_scale_calibration_leaves_config_untouched() {
    let base = SensorConfig::default();
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[1023, 300]), 0, base).unwrap();
    assert_eq!(
        sensor.calibrate(),
        Err(Error::Sensor(SensorError::DegenerateResistance))
    );
    // The next good reading still calibrates.
    let cal = sensor.calibrate().unwrap();
    assert!(cal.is_usable());
    assert!(base.with_calibration(&cal).validate().is_ok());
}

#[test]
fn calibrated_ppm_does_not_depend_on_the_reading() {
    let mut sensor =
        Mq135::new(ScriptedAdc::counts(&[150, 650, 950]), 0, SensorConfig::default()).unwrap();
    let atm = sensor.config().curve(Gas::Toluene).atmospheric_ppm;
    for _ in 0..3 {
        let ppm = sensor.calibrated_gas_ppm(Gas::Toluene, 25.0, 40.0).unwrap();
        assert!(within(ppm, atm, 1e-3), "{ppm}");
    }
}

#[test]
fn correction_branches_meet_with_a_gap_at_20c() {
    let sensor = Mq135::new(ScriptedAdc::counts(&[]), 0, SensorConfig::default()).unwrap();
    let cold = sensor.correction_factor(19.999_9, 33.0);
    let warm = sensor.correction_factor(20.0, 33.0);
    assert!(warm > cold);
    assert!((warm - cold - 0.0082).abs() < 5e-4, "gap = {}", warm - cold);
}

#[test]
fn driver_accepts_json_config() {
    let cfg = SensorConfig::from_json(
        r#"{
            "load_resistance_ohms": 20000.0,
            "warmup_reads": 0,
            "samples_per_read": 1
        }"#,
    )
    .unwrap();
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[200]), 0, cfg).unwrap();
    let r = sensor.read_resistance().unwrap();
    assert!(within(r, 82_300.0, 1e-5), "{r}");
    assert!(sensor.is_warmed_up());
}
