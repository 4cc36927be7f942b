//! LED driver contract.
//!
//! The compositor never talks to hardware directly. A driver crate
//! implements [`LedDevice`] for its strip type and the ring is generic over
//! it.

use crate::config::BrightnessRange;
use crate::error::{DeviceInitError, DeviceIoError, PermissionDenied};

/// Settings passed verbatim to [`LedDevice::init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub led_count: usize,
    pub brightness: BrightnessRange,
    pub gpio_pin: u8,
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
pub trait LedDevice: Sized {
    /// Check that the process may access the hardware
    ///
    /// Called before [`LedDevice::init`]. Drivers that map hardware memory
    /// should reject unprivileged processes here.
    fn check_access() -> Result<(), PermissionDenied> {
        Ok(())
    }

    /// Bring up the driver
    fn init(config: &DeviceConfig) -> Result<Self, DeviceInitError>;

    /// Frame buffer of packed `0x00RRGGBB` values, at least `led_count` long
    fn leds(&mut self) -> &mut [u32];

    /// Push the frame buffer to the strip
    fn flush(&mut self) -> Result<(), DeviceIoError>;

    /// Release hardware resources
    ///
    /// Must be safe to call more than once.
    fn close(&mut self);
}
