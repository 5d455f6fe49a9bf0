use heapless::String;

use crate::constants::{DEVICE_ID_CAPACITY, DEVICE_ID_SEGMENT, SERIAL_SEPARATOR};
use crate::error::Error;

pub type DeviceId = String<DEVICE_ID_CAPACITY>;

/// Platform capability returning the unique hardware serial of the device.
pub trait SerialSource {
    fn read_serial(&self) -> &str;
}

impl<S: SerialSource + ?Sized> SerialSource for &S {
    fn read_serial(&self) -> &str {
        (**self).read_serial()
    }
}

/// Serial known ahead of time (host builds, tests, boards without a readable ID).
#[derive(Debug, Clone, Copy)]
pub struct StaticSerial(pub &'static str);

impl SerialSource for StaticSerial {
    fn read_serial(&self) -> &str {
        self.0
    }
}

// Splits the serial on `-` and keeps the second segment, so "A-B-C" yields "B"
// and not "B-C". A serial without any separator is rejected.
pub fn derive_device_id(serial: &str) -> Result<DeviceId, Error> {
    let segment = serial
        .split(SERIAL_SEPARATOR)
        .nth(DEVICE_ID_SEGMENT)
        .ok_or(Error::MalformedSerial)?;

    DeviceId::try_from(segment).map_err(|_| Error::DeviceIdTooLong)
}
