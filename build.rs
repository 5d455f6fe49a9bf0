use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

fn default_mqtt_hostname() -> String {
    "iot.eclipse.org".into()
}

fn default_mqtt_port() -> u16 {
    1883
}

fn default_mqtt_topic() -> String {
    "mybuilding/mylocation/".into()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    #[serde(default = "default_mqtt_hostname")]
    mqtt_hostname: String,
    #[serde(default = "default_mqtt_port")]
    mqtt_port: u16,
    mqtt_username: Option<String>,
    mqtt_password: Option<String>,
    #[serde(default = "default_mqtt_topic")]
    mqtt_topic: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    if raw.mqtt_hostname.is_empty() {
        return Err("cfg.toml: mqtt_hostname must not be empty".into());
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
            mqtt_topic: {mt:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port,
        mu = raw.mqtt_username,
        mpw = raw.mqtt_password,
        mt = raw.mqtt_topic,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
