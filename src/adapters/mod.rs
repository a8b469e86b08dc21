//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter     | Implements    | Connects to                   |
//! |-------------|---------------|-------------------------------|
//! | `esp_adc`   | AnalogInput   | ESP32 ADC1 oneshot driver     |
//! | `fn_input`  | AnalogInput   | any `FnMut(&pin) -> u16`      |
//! | `sim`       | AnalogInput   | shared atomic level (host)    |
//! | `log_sink`  | ReadingSink   | serial log output             |

#[cfg(feature = "espidf")]
pub mod esp_adc;
pub mod fn_input;
pub mod log_sink;
#[cfg(not(target_os = "espidf"))]
pub mod sim;
