use core::fmt;

/// Error returned by a driver that failed to come up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInitError(pub &'static str);

/// Error returned by a driver that failed to push a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIoError(pub &'static str);

/// Error returned when the process may not access the LED hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDenied;

/// Errors reported by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Zero or over-capacity size, or an inverted brightness range
    InvalidConfig,
    /// Insufficient privilege for hardware access
    PermissionDenied,
    /// The driver failed to initialize
    DeviceInit(DeviceInitError),
    /// Writing a frame to the hardware failed
    DeviceIo(DeviceIoError),
}

impl From<PermissionDenied> for Error {
    fn from(_: PermissionDenied) -> Self {
        Self::PermissionDenied
    }
}

impl From<DeviceInitError> for Error {
    fn from(err: DeviceInitError) -> Self {
        Self::DeviceInit(err)
    }
}

impl From<DeviceIoError> for Error {
    fn from(err: DeviceIoError) -> Self {
        Self::DeviceIo(err)
    }
}

impl fmt::Display for DeviceInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not start LED device: {}", self.0)
    }
}

impl fmt::Display for DeviceIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not write to LED device: {}", self.0)
    }
}

impl fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LED device needs elevated privileges")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig => f.write_str("invalid ring or layer configuration"),
            Self::PermissionDenied => fmt::Display::fmt(&PermissionDenied, f),
            Self::DeviceInit(err) => fmt::Display::fmt(err, f),
            Self::DeviceIo(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for DeviceInitError {}
impl core::error::Error for DeviceIoError {}
impl core::error::Error for PermissionDenied {}
impl core::error::Error for Error {}
