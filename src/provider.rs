use embassy_sync::once_lock::OnceLock;
use log::{error, info};

use crate::config::Config;
use crate::error::Error;
use crate::serial::SerialSource;
use crate::settings::DeviceSettings;

/// Builds the [`DeviceSettings`] on first access and hands out the same
/// record afterwards.
///
/// A failed construction stores nothing, so the next call reads the serial
/// again instead of returning a degraded record.
pub struct ConfigurationProvider<S> {
    config: &'static Config,
    source: S,
    settings: OnceLock<DeviceSettings>,
}

impl<S> ConfigurationProvider<S>
where
    S: SerialSource,
{
    pub const fn new(config: &'static Config, source: S) -> Self {
        Self {
            config,
            source,
            settings: OnceLock::new(),
        }
    }

    pub fn settings(&self) -> Result<&DeviceSettings, Error> {
        if let Some(settings) = self.settings.try_get() {
            return Ok(settings);
        }

        let serial = self.source.read_serial();
        let settings = DeviceSettings::new(self.config, serial).inspect_err(|e| {
            error!("Cannot derive device id from serial {:?}: {}", serial, e);
        })?;

        info!(
            "Device settings ready: id={} broker={}:{}",
            settings.device_id(),
            settings.broker_host(),
            settings.broker_port()
        );

        Ok(self.settings.get_or_init(|| settings))
    }

    /// Settings built by an earlier successful [`Self::settings`] call, if any.
    pub fn get(&self) -> Option<&DeviceSettings> {
        self.settings.try_get()
    }
}
