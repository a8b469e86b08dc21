//! Closure-backed analog input.
//!
//! Wraps any `FnMut(&P) -> u16`, the shape of an Arduino-style
//! `analogRead(pin)`, so the driver can be fed from a board support
//! function or from synthetic readings.

use core::marker::PhantomData;

use crate::error::SensorError;
use crate::ports::AnalogInput;

pub struct FnAnalogInput<P, F> {
    read: F,
    _pin: PhantomData<fn(&P)>,
}

impl<P, F> FnAnalogInput<P, F>
where
    F: FnMut(&P) -> u16,
{
    pub fn new(read: F) -> Self {
        Self {
            read,
            _pin: PhantomData,
        }
    }
}

impl<P, F> AnalogInput for FnAnalogInput<P, F>
where
    F: FnMut(&P) -> u16,
{
    type Pin = P;

    fn read_raw(&mut self, pin: &P) -> Result<u16, SensorError> {
        Ok((self.read)(pin))
    }
}
