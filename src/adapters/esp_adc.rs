//! ESP32 ADC1 oneshot adapter.
//!
//! Owns an ADC1 oneshot unit handle via raw ESP-IDF sys calls and exposes
//! its channels through [`AnalogInput`].  Counts are 12-bit, so pair it
//! with `adc_full_scale = 4095`.

use esp_idf_svc::sys::*;
use log::info;

use crate::error::SensorError;
use crate::ports::AnalogInput;

/// Errors while bringing up the ADC unit or a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcInitError {
    UnitInitFailed(i32),
    ChannelConfigFailed(i32),
}

impl core::fmt::Display for AdcInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnitInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::ChannelConfigFailed(rc) => write!(f, "ADC1 channel config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for AdcInitError {}

pub struct EspAdc1 {
    handle: adc_oneshot_unit_handle_t,
}

impl EspAdc1 {
    pub fn new() -> Result<Self, AdcInitError> {
        let init_cfg = adc_oneshot_unit_init_cfg_t {
            unit_id: adc_unit_t_ADC_UNIT_1,
            ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
            ..Default::default()
        };
        let mut handle: adc_oneshot_unit_handle_t = core::ptr::null_mut();
        // SAFETY: `init_cfg` and `handle` outlive the call; the driver writes
        // the new unit handle into `handle` on success.
        let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut handle) };
        if ret != ESP_OK as i32 {
            return Err(AdcInitError::UnitInitFailed(ret));
        }
        Ok(Self { handle })
    }

    /// Configure `channel` for the full 0 – 3.1 V input range at 12 bits.
    pub fn configure_channel(&mut self, channel: adc_channel_t) -> Result<(), AdcInitError> {
        let chan_cfg = adc_oneshot_chan_cfg_t {
            atten: adc_atten_t_ADC_ATTEN_DB_12,
            bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
        };
        // SAFETY: `self.handle` is a live unit handle owned by this struct.
        let ret = unsafe { adc_oneshot_config_channel(self.handle, channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(AdcInitError::ChannelConfigFailed(ret));
        }
        info!("esp_adc: ADC1 channel {} configured", channel);
        Ok(())
    }
}

impl AnalogInput for EspAdc1 {
    type Pin = adc_channel_t;

    fn read_raw(&mut self, pin: &adc_channel_t) -> Result<u16, SensorError> {
        let mut raw: i32 = 0;
        // SAFETY: `self.handle` is live; `&mut self` rules out concurrent reads.
        let ret = unsafe { adc_oneshot_read(self.handle, *pin, &mut raw) };
        if ret != ESP_OK as i32 {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(raw.max(0) as u16)
    }
}

impl Drop for EspAdc1 {
    fn drop(&mut self) {
        // SAFETY: the handle was created by `adc_oneshot_new_unit` and is
        // released exactly once here.
        unsafe {
            adc_oneshot_del_unit(self.handle);
        }
    }
}
