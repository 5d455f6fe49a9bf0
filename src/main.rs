#![no_std]
#![no_main]

use static_cell::StaticCell;

use embassy_executor::Spawner;

use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println::logger::init_logger;

use esp32_device_settings::constants::VERSION;
use esp32_device_settings::{ConfigurationProvider, DeviceSettings, CONFIG};

mod efuse;

use efuse::EfuseSerial;

static PROVIDER: StaticCell<ConfigurationProvider<EfuseSerial>> = StaticCell::new();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    init_logger(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    log::info!("Firmware version {}", VERSION);

    let serial = match EfuseSerial::read() {
        Ok(serial) => serial,
        Err(e) => {
            log::error!("Failed to read hardware serial: {:?}", e);
            return;
        }
    };

    let provider: &'static ConfigurationProvider<EfuseSerial> =
        PROVIDER.init(ConfigurationProvider::new(&CONFIG, serial));

    // Without a device id, topics would be misrouted: nothing else is started.
    let settings = match provider.settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Device settings unavailable, halting: {}", e);
            return;
        }
    };

    spawner.spawn(settings_task(settings)).ok();
}

// Single consumer of the settings in this image; network and MQTT tasks take
// the same `&'static DeviceSettings`.
#[embassy_executor::task]
async fn settings_task(settings: &'static DeviceSettings) {
    log::info!("{:?}", settings);

    match settings.topic("") {
        Ok(topic) => log::info!("Publishing under {}", topic),
        Err(e) => log::error!("Device topic unavailable: {}", e),
    }
}
