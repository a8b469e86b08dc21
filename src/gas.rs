//! Gases the MQ135 curve fits cover.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A target gas with its own power-law curve fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    /// Carbon monoxide.
    Co,
    /// Carbon dioxide.
    Co2,
    Ethanol,
    /// Ammonium.
    Nh4,
    Toluene,
    Acetone,
}

impl Gas {
    /// Every gas, in snapshot order.
    pub const ALL: [Gas; 6] = [
        Gas::Co,
        Gas::Co2,
        Gas::Ethanol,
        Gas::Nh4,
        Gas::Toluene,
        Gas::Acetone,
    ];

    /// Position of this gas in [`Gas::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Co => 0,
            Self::Co2 => 1,
            Self::Ethanol => 2,
            Self::Nh4 => 3,
            Self::Toluene => 4,
            Self::Acetone => 5,
        }
    }

    /// Short label used in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Co => "CO",
            Self::Co2 => "CO2",
            Self::Ethanol => "EtOH",
            Self::Nh4 => "NH4",
            Self::Toluene => "Toluene",
            Self::Acetone => "Acetone",
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
