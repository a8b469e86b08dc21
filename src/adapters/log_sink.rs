//! Log-based reading sink adapter.
//!
//! Implements [`ReadingSink`] by writing one line per snapshot to the
//! logger (UART / USB-CDC on the board, stderr on the host).

use log::info;

use crate::gas::Gas;
use crate::ports::ReadingSink;
use crate::sensors::GasSnapshot;

/// Adapter that logs every [`GasSnapshot`].
pub struct LogReadingSink;

impl LogReadingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReadingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSink for LogReadingSink {
    fn emit(&mut self, s: &GasSnapshot) {
        info!(
            "GAS | R={:.0}\u{2126} | CO={:.2} CO2={:.1} EtOH={:.2} NH4={:.2} \
             Toluene={:.2} Acetone={:.2} ppm",
            s.resistance_ohms,
            s.ppm(Gas::Co),
            s.ppm(Gas::Co2),
            s.ppm(Gas::Ethanol),
            s.ppm(Gas::Nh4),
            s.ppm(Gas::Toluene),
            s.ppm(Gas::Acetone),
        );
    }
}
