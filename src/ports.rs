//! Port traits — the boundary between the conversion logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Mq135 (formulas)
//! ```
//!
//! Driven adapters (ADC channels, log output) implement these traits.  The
//! [`Mq135`](crate::sensors::mq135::Mq135) driver consumes them via
//! generics, so the formulas never touch hardware directly and can be fed
//! synthetic readings in tests.

use crate::error::SensorError;
use crate::sensors::GasSnapshot;

// ───────────────────────────────────────────────────────────────
// Analog input (driven adapter: hardware → driver)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one raw conversion from an analog channel.
pub trait AnalogInput {
    /// Channel identifier.  Opaque to the driver; passed through unchanged.
    type Pin;

    /// Take one conversion.  Counts are in `[0, full_scale]`; range
    /// checking is left to the caller.
    fn read_raw(&mut self, pin: &Self::Pin) -> Result<u16, SensorError>;
}

impl<A: AnalogInput + ?Sized> AnalogInput for &mut A {
    type Pin = A::Pin;

    fn read_raw(&mut self, pin: &Self::Pin) -> Result<u16, SensorError> {
        (**self).read_raw(pin)
    }
}

// ───────────────────────────────────────────────────────────────
// Reading sink (driven adapter: driver → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// Snapshots are pushed through this port.  Adapters decide where they go
/// (serial log, radio, a test buffer).
pub trait ReadingSink {
    fn emit(&mut self, snapshot: &GasSnapshot);
}
