//! Device settings for the ESP32 sensor firmware.
//!
//! Network credentials, broker and topic namespace come from `cfg.toml` at
//! build time; the device id is derived at boot from the hardware serial.
//! [`ConfigurationProvider`] builds the [`DeviceSettings`] once and the
//! firmware passes the resulting reference to whatever needs it.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod serial;
pub mod settings;

pub use config::{Config, CONFIG};
pub use error::Error;
pub use provider::ConfigurationProvider;
pub use serial::{derive_device_id, DeviceId, SerialSource, StaticSerial};
pub use settings::{DeviceSettings, Topic};
