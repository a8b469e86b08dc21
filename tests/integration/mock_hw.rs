//! Mock hardware for integration tests.
//!
//! `ScriptedAdc` replays a fixed sequence of conversions and records which
//! pin every read targeted; `CaptureSink` keeps every emitted snapshot.

use std::collections::VecDeque;

use mq135::ports::{AnalogInput, ReadingSink};
use mq135::{GasSnapshot, SensorError};

// ── ScriptedAdc ───────────────────────────────────────────────

pub struct ScriptedAdc {
    script: VecDeque<Result<u16, SensorError>>,
    pub pins_read: Vec<u8>,
}

#[allow(dead_code)]
impl ScriptedAdc {
    pub fn new(script: impl IntoIterator<Item = Result<u16, SensorError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            pins_read: Vec::new(),
        }
    }

    /// Every read succeeds with the given counts, in order.
    pub fn counts(counts: &[u16]) -> Self {
        Self::new(counts.iter().copied().map(Ok))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl AnalogInput for ScriptedAdc {
    type Pin = u8;

    fn read_raw(&mut self, pin: &u8) -> Result<u16, SensorError> {
        self.pins_read.push(*pin);
        self.script
            .pop_front()
            .expect("ScriptedAdc ran out of scripted readings")
    }
}

// ── CaptureSink ───────────────────────────────────────────────

#[derive(Default)]
pub struct CaptureSink {
    pub snapshots: Vec<GasSnapshot>,
}

impl ReadingSink for CaptureSink {
    fn emit(&mut self, snapshot: &GasSnapshot) {
        self.snapshots.push(*snapshot);
    }
}
