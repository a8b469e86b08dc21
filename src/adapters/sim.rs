//! Host-side simulated ADC channel.
//!
//! The level lives in an `AtomicU16` behind an `Arc`, so a test can keep a
//! [`SimLevel`] handle and change the reading while the driver owns the
//! input.  Setting [`SimLevel::fail`] makes the next reads report an ADC
//! error.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};
use std::sync::Arc;

use crate::error::SensorError;
use crate::ports::AnalogInput;

#[derive(Default)]
struct SimState {
    raw: AtomicU16,
    failing: AtomicBool,
    reads: AtomicU32,
}

/// Shared handle onto a [`SimAnalogInput`]'s level.
#[derive(Clone)]
pub struct SimLevel(Arc<SimState>);

impl SimLevel {
    pub fn set(&self, raw: u16) {
        self.0.raw.store(raw, Ordering::Relaxed);
    }

    pub fn get(&self) -> u16 {
        self.0.raw.load(Ordering::Relaxed)
    }

    pub fn fail(&self, failing: bool) {
        self.0.failing.store(failing, Ordering::Relaxed);
    }

    /// Conversions taken so far, including failed ones.
    pub fn reads(&self) -> u32 {
        self.0.reads.load(Ordering::Relaxed)
    }
}

/// Simulated ADC; every channel reads the same level.
pub struct SimAnalogInput {
    state: Arc<SimState>,
}

impl SimAnalogInput {
    pub fn new(initial_raw: u16) -> Self {
        let state = SimState::default();
        state.raw.store(initial_raw, Ordering::Relaxed);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn level(&self) -> SimLevel {
        SimLevel(Arc::clone(&self.state))
    }
}

impl AnalogInput for SimAnalogInput {
    type Pin = u32;

    fn read_raw(&mut self, _pin: &u32) -> Result<u16, SensorError> {
        self.state.reads.fetch_add(1, Ordering::Relaxed);
        if self.state.failing.load(Ordering::Relaxed) {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(self.state.raw.load(Ordering::Relaxed))
    }
}
