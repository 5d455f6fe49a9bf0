use core::fmt::Write;

use esp_hal::efuse::Efuse;
use heapless::String;

use esp32_device_settings::constants::{SERIAL_CAPACITY, SERIAL_SEPARATOR};
use esp32_device_settings::SerialSource;

const CHIP_PREFIX: &str = "esp32";

#[derive(Debug)]
pub enum Error {
    SerialTooLong,
}

// Hardware serial built from the factory base MAC burned in eFuse,
// formatted as "esp32-<mac hex>" so the device id is the lowercase MAC.
pub struct EfuseSerial {
    serial: String<SERIAL_CAPACITY>,
}

impl EfuseSerial {
    pub fn read() -> Result<Self, Error> {
        let mac = Efuse::read_base_mac_address();

        let mut serial = String::new();
        write!(serial, "{}{}", CHIP_PREFIX, SERIAL_SEPARATOR).map_err(|_| Error::SerialTooLong)?;
        for byte in mac {
            write!(serial, "{:02x}", byte).map_err(|_| Error::SerialTooLong)?;
        }

        Ok(Self { serial })
    }
}

impl SerialSource for EfuseSerial {
    fn read_serial(&self) -> &str {
        &self.serial
    }
}
