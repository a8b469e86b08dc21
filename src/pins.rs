//! Peripheral assignments for the ESP32-S3 monitor board.
//!
//! Single source of truth for the binary; the library itself takes the
//! channel as an opaque value.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ135 analog output via the on-board divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const MQ135_ADC1_CHANNEL: u32 = 4;

/// Full-scale count of the 12-bit ADC1.
pub const ADC1_FULL_SCALE: u16 = 4095;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Main loop period (milliseconds).
pub const READ_PERIOD_MS: u32 = 1_000;
