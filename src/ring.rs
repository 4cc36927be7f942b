#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::color::{Color, composite_over, lerp, quantize};
use crate::config::{BrightnessRange, RingConfig};
use crate::device::{DeviceConfig, LedDevice};
use crate::error::{DeviceInitError, Error};
use crate::layer::Layer;
use crate::math::Rotation;

/// LED ring compositor - the main orchestrator
///
/// Owns the device and an ordered stack of borrowed layers. `N` caps both
/// the LED count and the layer resolution; `L` caps the number of layers.
///
/// Dropping the ring turns the LEDs off and releases the device.
pub struct Ring<'a, D: LedDevice, const N: usize, const L: usize> {
    // External dependencies and configuration
    device: D,
    led_count: usize,
    brightness: BrightnessRange,

    // Internal state
    layers: Vec<&'a Layer<N>, L>,
    offset_angle: f64,
    offset: Rotation,
    /// The last flushed frame was all-off
    dark: bool,
    closed: bool,
}

impl<'a, D: LedDevice, const N: usize, const L: usize> Ring<'a, D, N, L> {
    /// Check access, start the device and create an empty ring
    pub fn new(config: &RingConfig) -> Result<Self, Error> {
        config.validate(N)?;
        D::check_access()?;

        let mut device = D::init(&DeviceConfig {
            led_count: config.led_count,
            brightness: config.brightness,
            gpio_pin: config.gpio_pin,
        })?;
        if device.leds().len() < config.led_count {
            device.close();
            return Err(DeviceInitError("frame buffer is shorter than the LED count").into());
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Ring.new] started {} LEDs on GPIO {}",
            config.led_count, config.gpio_pin
        );

        Ok(Self {
            device,
            led_count: config.led_count,
            brightness: config.brightness,
            layers: Vec::new(),
            offset_angle: config.offset,
            offset: Rotation::from_angle(config.offset, config.led_count),
            dark: false,
            closed: false,
        })
    }

    /// Number of LEDs on the ring
    pub const fn size(&self) -> usize {
        self.led_count
    }

    /// Number of stacked layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Brightness range the device was started with
    pub const fn brightness(&self) -> BrightnessRange {
        self.brightness
    }

    /// Current global offset in radians
    pub const fn offset(&self) -> f64 {
        self.offset_angle
    }

    /// Access the underlying device
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Put a layer on top of the stack
    ///
    /// Returns the layer back if the stack is full.
    pub fn add_layer(&mut self, layer: &'a Layer<N>) -> Result<(), &'a Layer<N>> {
        self.layers.push(layer)
    }

    /// Set the angular offset (radians) of the whole composition
    ///
    /// A positive angle rotates counter-clockwise. Applied on the next render.
    pub fn set_offset(&mut self, angle: f64) {
        self.offset_angle = angle;
        self.offset = Rotation::from_angle(angle, self.led_count);
    }

    /// Composite all layers and push the frame to the device
    ///
    /// Layers are read inside one critical section, so the frame reflects a
    /// single instant even while other tasks mutate them.
    pub fn render(&mut self) -> Result<(), Error> {
        let count = self.led_count;
        let mut raw = [Color::TRANSPARENT; N];

        critical_section::with(|cs| {
            for (position, pixel) in raw[..count].iter_mut().enumerate() {
                *pixel = composite_over(
                    self.layers
                        .iter()
                        .map(|layer| layer.contribution(cs, position, count)),
                );
            }
        });

        let Rotation { shift, weight } = self.offset;
        let leds = self.device.leds();
        for (position, led) in leds[..count].iter_mut().enumerate() {
            let from = raw[(position + shift) % count];
            let to = raw[(position + shift + 1) % count];
            *led = quantize(lerp(from, to, weight));
        }

        self.dark = false;
        self.flush()
    }

    /// Turn every LED off without touching layers or the offset
    pub fn turn_off(&mut self) -> Result<(), Error> {
        let count = self.led_count;
        self.device.leds()[..count].fill(0);
        let result = self.flush();
        self.dark = result.is_ok();
        result
    }

    /// Turn the LEDs off and release the device
    ///
    /// The device is released even if the final frame fails to flush; that
    /// error is returned.
    pub fn close(mut self) -> Result<(), Error> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), Error> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let result = if self.dark { Ok(()) } else { self.turn_off() };
        self.device.close();

        #[cfg(feature = "esp32-log")]
        println!("[Ring.close] device released");

        result
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.device.flush().map_err(|err| {
            #[cfg(feature = "esp32-log")]
            println!("[Ring.flush] {}", err);
            Error::from(err)
        })
    }
}

impl<D: LedDevice, const N: usize, const L: usize> Drop for Ring<'_, D, N, L> {
    fn drop(&mut self) {
        // Nothing left to report a failed final frame to
        let _ = self.shutdown();
    }
}
