use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The hardware serial has no segment after a `-` separator
    MalformedSerial,
    DeviceIdTooLong,
    TopicTooLong,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedSerial => f.write_str("hardware serial has no '-' separated device id"),
            Error::DeviceIdTooLong => f.write_str("device id exceeds DEVICE_ID_CAPACITY"),
            Error::TopicTooLong => f.write_str("topic exceeds TOPIC_CAPACITY"),
        }
    }
}
