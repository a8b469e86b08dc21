//! Integration tests for the ADC → Mq135 → sink pipeline.

use embedded_hal::delay::DelayNs;
use mq135::adapters::sim::SimAnalogInput;
use mq135::ports::ReadingSink;
use mq135::sensors::filter::RunningAverage;
use mq135::{Error, Gas, Mq135, SensorConfig, SensorError};

use super::mock_hw::{CaptureSink, ScriptedAdc};

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn config() -> SensorConfig {
    SensorConfig {
        warmup_reads: 0,
        ..SensorConfig::default()
    }
}

#[test]
fn snapshot_uses_one_read_for_every_gas() {
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[200]), 3, config()).unwrap();
    let mut sink = CaptureSink::default();

    let snapshot = sensor.read_all().unwrap();
    sink.emit(&snapshot);

    let (adc, _) = sensor.release();
    assert_eq!(adc.pins_read, vec![3]);
    assert_eq!(adc.remaining(), 0);

    assert_eq!(sink.snapshots.len(), 1);
    let captured = &sink.snapshots[0];
    assert!((captured.resistance_ohms - 41_150.0).abs() < 0.05);
    for gas in Gas::ALL {
        assert!(captured.ppm(gas).is_finite() && captured.ppm(gas) > 0.0);
    }
}

#[test]
fn adc_failure_surfaces_and_next_read_recovers() {
    let adc = ScriptedAdc::new([Err(SensorError::AdcReadFailed), Ok(512)]);
    let mut sensor = Mq135::new(adc, 0, config()).unwrap();

    assert_eq!(
        sensor.gas_ppm_from_sensor(Gas::Co),
        Err(Error::Sensor(SensorError::AdcReadFailed))
    );
    assert!(sensor.gas_ppm_from_sensor(Gas::Co).is_ok());
}

#[test]
fn zero_reading_mid_stream_is_rejected_not_clamped() {
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[300, 0, 300]), 0, config()).unwrap();

    let first = sensor.read_resistance().unwrap();
    assert_eq!(
        sensor.read_resistance(),
        Err(Error::Sensor(SensorError::InvalidReading(0)))
    );
    assert_eq!(sensor.read_resistance().unwrap(), first);
}

#[test]
fn averaged_read_aborts_on_bad_sample() {
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[300, 300, 0, 300]), 0, config()).unwrap();
    assert_eq!(
        sensor.read_resistance_averaged(&mut NoDelay),
        Err(Error::Sensor(SensorError::InvalidReading(0)))
    );
}

#[test]
fn averaged_read_is_mean_of_samples() {
    let counts = [200, 300, 400, 500];
    let cfg = config();
    let mut sensor = Mq135::new(ScriptedAdc::counts(&counts), 0, cfg).unwrap();

    let expected: f32 = counts
        .iter()
        .map(|&c| mq135::model::resistance_from_raw(c, cfg.adc_full_scale, cfg.load_resistance_ohms))
        .sum::<f32>()
        / counts.len() as f32;
    let got = sensor.read_resistance_averaged(&mut NoDelay).unwrap();
    assert!((got - expected).abs() / expected < 1e-6);
}

#[test]
fn compensated_snapshot_scales_resistance_by_factor() {
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[250, 250]), 0, config()).unwrap();
    let plain = sensor.read_all().unwrap();
    let compensated = sensor.read_all_compensated(30.0, 70.0).unwrap();
    let factor = sensor.correction_factor(30.0, 70.0);
    assert_eq!(compensated.resistance_ohms, plain.resistance_ohms / factor);
}

#[test]
fn twelve_bit_full_scale() {
    let cfg = SensorConfig {
        adc_full_scale: 4095,
        ..config()
    };
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[4095, 4096]), 0, cfg).unwrap();
    assert_eq!(sensor.read_resistance(), Ok(0.0));
    assert_eq!(
        sensor.read_resistance(),
        Err(Error::Sensor(SensorError::InvalidReading(4096)))
    );
}

#[test]
fn driver_can_borrow_a_simulated_input() {
    let mut sim = SimAnalogInput::new(200);
    let level = sim.level();
    {
        let mut sensor = Mq135::new(&mut sim, 0, config()).unwrap();
        let low = sensor.gas_ppm_from_sensor(Gas::Co2).unwrap();
        level.set(600);
        let high = sensor.gas_ppm_from_sensor(Gas::Co2).unwrap();
        // Higher count → lower resistance → more gas.
        assert!(high > low, "{high} <= {low}");
    }
    assert_eq!(level.reads(), 2);

    level.fail(true);
    let mut sensor = Mq135::new(&mut sim, 0, config()).unwrap();
    assert_eq!(
        sensor.read_all(),
        Err(Error::Sensor(SensorError::AdcReadFailed))
    );
}

#[test]
fn smoothing_over_driver_readings() {
    let mut sensor = Mq135::new(ScriptedAdc::counts(&[300, 300, 300]), 0, config()).unwrap();
    let mut avg = RunningAverage::<8>::new();
    let mut last = None;
    for _ in 0..3 {
        last = avg.push(sensor.gas_ppm_from_sensor(Gas::Nh4).unwrap());
    }
    let single = sensor.gas_ppm(Gas::Nh4, sensor.config().load_resistance_ohms * (1023.0 / 300.0 - 1.0));
    assert!((last.unwrap() - single).abs() / single < 1e-4);
}
