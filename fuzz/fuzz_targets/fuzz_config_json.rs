//! Fuzz target: `SensorConfig::from_json`
//!
//! Feeds arbitrary bytes to the config loader.  Anything it accepts must
//! pass validation again and build a driver.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use mq135::adapters::fn_input::FnAnalogInput;
use mq135::{Mq135, SensorConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = SensorConfig::from_json(doc) {
        assert!(cfg.validate().is_ok());
        assert!(Mq135::new(FnAnalogInput::new(|_: &u8| 512), 0, cfg).is_ok());
    }
});
