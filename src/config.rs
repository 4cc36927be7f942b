use crate::error::Error;

/// Default PWM-capable GPIO pin (BCM numbering, not the physical pin)
pub const DEFAULT_GPIO_PIN: u8 = 18;

/// Default maximum brightness
///
/// Full scale can draw more current than a small board supplies.
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 64;

/// Output brightness range handed to the LED driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    min: u8,
    max: u8,
}

impl BrightnessRange {
    /// Create a new brightness range
    ///
    /// Fails if `min` is above `max`.
    pub const fn new(min: u8, max: u8) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvalidConfig);
        }
        Ok(Self { min, max })
    }

    /// Minimum output brightness
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Maximum output brightness
    pub const fn max(self) -> u8 {
        self.max
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_BRIGHTNESS,
        }
    }
}

/// Configuration for a [`Ring`](crate::Ring)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfig {
    /// Number of physical LEDs
    pub led_count: usize,
    /// Brightness range passed to the driver
    pub brightness: BrightnessRange,
    /// GPIO pin the strip data line is attached to
    pub gpio_pin: u8,
    /// Initial global offset in radians
    pub offset: f64,
}

impl RingConfig {
    /// Create a configuration with default brightness, pin and offset
    pub fn new(led_count: usize) -> Self {
        Self {
            led_count,
            brightness: BrightnessRange::default(),
            gpio_pin: DEFAULT_GPIO_PIN,
            offset: 0.0,
        }
    }

    /// Set the brightness range
    #[must_use]
    pub fn with_brightness(mut self, brightness: BrightnessRange) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the GPIO pin
    #[must_use]
    pub fn with_gpio_pin(mut self, gpio_pin: u8) -> Self {
        self.gpio_pin = gpio_pin;
        self
    }

    /// Set the initial global offset
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Check the configuration against a ring capacity of `max_leds`
    pub const fn validate(&self, max_leds: usize) -> Result<(), Error> {
        if self.led_count == 0 || self.led_count > max_leds {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}
