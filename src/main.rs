//! MQ135 monitor firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  EspAdc1 (AnalogInput)          LogReadingSink       │
//! │  ───────────── Port trait boundary ─────────────     │
//! │            Mq135 driver · SensorConfig               │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Reads the sensor once per period, logs every gas, keeps a moving CO2
//! average and periodically logs the CO2 RZero so a clean-air baseline can
//! be copied into the config.
#![deny(unused_must_use)]

mod pins;

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use mq135::adapters::esp_adc::EspAdc1;
use mq135::adapters::log_sink::LogReadingSink;
use mq135::ports::ReadingSink;
use mq135::sensors::filter::RunningAverage;
use mq135::{Gas, Mq135, SensorConfig};

/// Loop iterations between RZero log lines.
const RZERO_LOG_EVERY: u32 = 60;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("MQ135 monitor v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. ADC + driver ───────────────────────────────────────
    let mut adc = EspAdc1::new()?;
    adc.configure_channel(pins::MQ135_ADC1_CHANNEL)?;

    let config = SensorConfig {
        adc_full_scale: pins::ADC1_FULL_SCALE,
        ..SensorConfig::default()
    };
    let mut sensor = Mq135::new(adc, pins::MQ135_ADC1_CHANNEL, config)?;
    let mut sink = LogReadingSink::new();
    let mut co2_avg = RunningAverage::<30>::new();
    let mut delay = FreeRtos;

    // ── 3. Main loop ──────────────────────────────────────────
    let mut tick: u32 = 0;
    loop {
        let reading = sensor
            .read_resistance_averaged(&mut delay)
            .and_then(|resistance| Ok((resistance, sensor.snapshot(resistance)?)));
        match reading {
            Ok((resistance, snapshot)) => {
                sink.emit(&snapshot);

                if let Some(avg) = co2_avg.push(snapshot.ppm(Gas::Co2)) {
                    info!("CO2 | avg={:.1}ppm over {} samples", avg, co2_avg.len());
                }
                if sensor.is_warmed_up() && tick % RZERO_LOG_EVERY == 0 {
                    info!(
                        "CAL | RZero CO2={:.0}\u{2126} (valid in clean outdoor air only)",
                        sensor.rzero(Gas::Co2, resistance)
                    );
                }
            }
            Err(e) => warn!("MQ135 read failed: {}", e),
        }

        tick = tick.wrapping_add(1);
        FreeRtos::delay_ms(pins::READ_PERIOD_MS);
    }
}
