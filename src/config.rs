pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'static str,

    // MQTT port (usually 1883 or 8883 for TLS)
    pub mqtt_port: u16,

    // MQTT username for authentication (optional)
    pub mqtt_username: Option<&'static str>,

    // MQTT password for authentication (optional)
    pub mqtt_password: Option<&'static str>,

    // Topic namespace prefix, the device id is appended to it
    pub mqtt_topic: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
