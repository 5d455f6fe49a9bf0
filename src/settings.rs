use core::fmt;

use heapless::String;

use crate::config::Config;
use crate::constants::TOPIC_CAPACITY;
use crate::error::Error;
use crate::serial::{derive_device_id, DeviceId};

pub type Topic = String<TOPIC_CAPACITY>;

const REDACTED: &str = "<redacted>";

/// Settings of this device: build-time literals from `cfg.toml` plus the
/// device id derived from the hardware serial.
///
/// Built once at boot and only ever shared by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceSettings {
    network_name: &'static str,
    network_password: &'static str,
    broker_host: &'static str,
    broker_port: u16,
    broker_username: Option<&'static str>,
    broker_password: Option<&'static str>,
    topic_prefix: &'static str,
    device_id: DeviceId,
}

impl DeviceSettings {
    pub fn new(config: &Config, serial: &str) -> Result<Self, Error> {
        let device_id = derive_device_id(serial)?;

        Ok(Self {
            network_name: config.wifi_ssid,
            network_password: config.wifi_psk,
            broker_host: config.mqtt_hostname,
            broker_port: config.mqtt_port,
            broker_username: config.mqtt_username,
            broker_password: config.mqtt_password,
            topic_prefix: config.mqtt_topic,
            device_id,
        })
    }

    pub fn network_name(&self) -> &'static str {
        self.network_name
    }

    pub fn network_password(&self) -> &'static str {
        self.network_password
    }

    pub fn broker_host(&self) -> &'static str {
        self.broker_host
    }

    pub fn broker_port(&self) -> u16 {
        self.broker_port
    }

    pub fn broker_username(&self) -> Option<&'static str> {
        self.broker_username
    }

    pub fn broker_password(&self) -> Option<&'static str> {
        self.broker_password
    }

    /// True when the broker expects a username; the password may still be absent.
    pub fn has_broker_credentials(&self) -> bool {
        self.broker_username.is_some()
    }

    pub fn topic_prefix(&self) -> &'static str {
        self.topic_prefix
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    // Builds "<prefix><device_id>/<leaf>", or "<prefix><device_id>" for an empty leaf.
    pub fn topic(&self, leaf: &str) -> Result<Topic, Error> {
        let mut topic = Topic::new();

        topic
            .push_str(self.topic_prefix)
            .map_err(|_| Error::TopicTooLong)?;
        topic
            .push_str(&self.device_id)
            .map_err(|_| Error::TopicTooLong)?;

        if !leaf.is_empty() {
            topic.push('/').map_err(|_| Error::TopicTooLong)?;
            topic.push_str(leaf).map_err(|_| Error::TopicTooLong)?;
        }

        Ok(topic)
    }
}

impl fmt::Debug for DeviceSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceSettings")
            .field("network_name", &self.network_name)
            .field("network_password", &REDACTED)
            .field("broker_host", &self.broker_host)
            .field("broker_port", &self.broker_port)
            .field("broker_username", &self.broker_username)
            .field("broker_password", &self.broker_password.map(|_| REDACTED))
            .field("topic_prefix", &self.topic_prefix)
            .field("device_id", &self.device_id.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ANONYMOUS: Config = Config {
        wifi_ssid: "myssid",
        wifi_psk: "mypassword",
        mqtt_hostname: "iot.eclipse.org",
        mqtt_port: 1883,
        mqtt_username: None,
        mqtt_password: None,
        mqtt_topic: "mybuilding/mylocation/",
    };

    static AUTHENTICATED: Config = Config {
        wifi_ssid: "lab",
        wifi_psk: "hunter2",
        mqtt_hostname: "broker.local",
        mqtt_port: 8883,
        mqtt_username: Some("sensor"),
        mqtt_password: Some(""),
        mqtt_topic: "lab/bench/",
    };

    #[test]
    fn copies_literals_from_config() {
        let settings = DeviceSettings::new(&ANONYMOUS, "33FFD605-41573033").unwrap();

        assert_eq!(settings.network_name(), "myssid");
        assert_eq!(settings.network_password(), "mypassword");
        assert_eq!(settings.broker_host(), "iot.eclipse.org");
        assert_eq!(settings.broker_port(), 1883);
        assert_eq!(settings.topic_prefix(), "mybuilding/mylocation/");
        assert_eq!(settings.device_id(), "41573033");
    }

    #[test]
    fn absent_credentials_differ_from_empty_ones() {
        let anonymous = DeviceSettings::new(&ANONYMOUS, "a-b").unwrap();
        assert_eq!(anonymous.broker_username(), None);
        assert_eq!(anonymous.broker_password(), None);
        assert!(!anonymous.has_broker_credentials());

        let authenticated = DeviceSettings::new(&AUTHENTICATED, "a-b").unwrap();
        assert_eq!(authenticated.broker_username(), Some("sensor"));
        assert_eq!(authenticated.broker_password(), Some(""));
        assert!(authenticated.has_broker_credentials());
    }

    #[test]
    fn malformed_serial_yields_no_settings() {
        assert_eq!(
            DeviceSettings::new(&ANONYMOUS, "nodash"),
            Err(Error::MalformedSerial)
        );
    }

    #[test]
    fn topic_is_namespaced_by_device_id() {
        let settings = DeviceSettings::new(&ANONYMOUS, "ABC-123").unwrap();

        assert_eq!(settings.topic("").unwrap(), "mybuilding/mylocation/123");
        assert_eq!(
            settings.topic("temperature").unwrap(),
            "mybuilding/mylocation/123/temperature"
        );
    }

    #[test]
    fn topic_overflow_is_reported() {
        let settings = DeviceSettings::new(&ANONYMOUS, "ABC-123").unwrap();
        let leaf = [b'x'; TOPIC_CAPACITY];
        let leaf = core::str::from_utf8(&leaf).unwrap();

        assert_eq!(settings.topic(leaf), Err(Error::TopicTooLong));
    }

    #[test]
    fn debug_output_hides_passwords() {
        let settings = DeviceSettings::new(&AUTHENTICATED, "a-b").unwrap();
        let rendered = format!("{settings:?}");

        assert!(rendered.contains("broker.local"));
        assert!(rendered.contains("sensor"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }
}
