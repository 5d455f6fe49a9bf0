/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Character separating the segments of a hardware serial
pub const SERIAL_SEPARATOR: char = '-';
/// Index of the serial segment used as device id
pub const DEVICE_ID_SEGMENT: usize = 1;

/// Maximum length in bytes of a derived device id
pub const DEVICE_ID_CAPACITY: usize = 32;
/// Maximum length in bytes of a full MQTT topic
pub const TOPIC_CAPACITY: usize = 128;
/// Maximum length in bytes of a serial produced by the firmware serial source
pub const SERIAL_CAPACITY: usize = 32;
