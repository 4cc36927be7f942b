//! Drawable layers.
//!
//! A layer owns a ring of pixels at its own resolution and a continuous
//! rotation. Every mutation resamples the rotated buffer before returning,
//! inside one critical section, so a reader on another task never sees a
//! half-applied change.

use core::cell::RefCell;
use core::fmt;

use critical_section::{CriticalSection, Mutex};

use crate::color::{Color, lerp};
use crate::error::Error;
use crate::math::{Rotation, scale, wrap};

/// How a layer is laid out on a ring whose LED count differs from the
/// layer resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Repeat the content around the ring
    #[default]
    Tile,
    /// Show the content once, starting at LED 0; the rest is transparent
    Crop,
    /// Stretch or squeeze the content to the whole ring (nearest sample,
    /// aliases when the sizes are not multiples of each other)
    Scale,
}

impl ContentMode {
    /// Map a ring position to a layer index
    ///
    /// Returns `None` when the layer contributes nothing at `position`.
    pub const fn map(self, position: usize, resolution: usize, led_count: usize) -> Option<usize> {
        match self {
            Self::Tile => Some(position % resolution),
            Self::Crop => {
                if position < resolution {
                    Some(position)
                } else {
                    None
                }
            }
            Self::Scale => Some(scale(position, led_count, resolution)),
        }
    }
}

struct LayerState<const N: usize> {
    pixels: [Color; N],
    sampled: [Color; N],
    angle: f64,
    rotation: Rotation,
}

impl<const N: usize> LayerState<N> {
    const fn new() -> Self {
        Self {
            pixels: [Color::TRANSPARENT; N],
            sampled: [Color::TRANSPARENT; N],
            angle: 0.0,
            rotation: Rotation::IDENTITY,
        }
    }

    fn resample(&mut self, resolution: usize) {
        let Rotation { shift, weight } = self.rotation;
        for (i, sampled) in self.sampled[..resolution].iter_mut().enumerate() {
            let from = self.pixels[(i + shift) % resolution];
            let to = self.pixels[(i + shift + 1) % resolution];
            *sampled = lerp(from, to, weight);
        }
    }
}

/// Drawable layer of up to `N` pixels
///
/// Layers are shared by reference: animation tasks mutate them through
/// `&Layer` while the ring reads them during render.
pub struct Layer<const N: usize> {
    resolution: usize,
    mode: ContentMode,
    state: Mutex<RefCell<LayerState<N>>>,
}

impl<const N: usize> Layer<N> {
    /// Create a new transparent layer
    ///
    /// Fails if `resolution` is zero or above `N`.
    pub const fn new(resolution: usize, mode: ContentMode) -> Result<Self, Error> {
        if resolution == 0 || resolution > N {
            return Err(Error::InvalidConfig);
        }
        Ok(Self {
            resolution,
            mode,
            state: Mutex::new(RefCell::new(LayerState::new())),
        })
    }

    /// Number of pixels in the layer
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Content mode chosen at creation
    pub const fn content_mode(&self) -> ContentMode {
        self.mode
    }

    /// Set every pixel to `color`
    pub fn set_all(&self, color: impl Into<Color>) {
        let color = color.into();
        self.update(|state| {
            state.pixels[..self.resolution].fill(color);
        });
    }

    /// Set one pixel; `index` wraps around the layer
    pub fn set_pixel(&self, index: isize, color: impl Into<Color>) {
        let color = color.into();
        let index = wrap(index, self.resolution);
        self.update(|state| {
            state.pixels[index] = color;
        });
    }

    /// Set the absolute rotation in radians
    ///
    /// A positive angle rotates the content counter-clockwise.
    pub fn rotate(&self, angle: f64) {
        let rotation = Rotation::from_angle(angle, self.resolution);
        self.update(|state| {
            state.angle = angle;
            state.rotation = rotation;
        });
    }

    /// Last angle passed to [`Layer::rotate`]
    pub fn rotation(&self) -> f64 {
        critical_section::with(|cs| self.state.borrow(cs).borrow().angle)
    }

    /// Stored, unrotated pixel; `index` wraps around the layer
    pub fn pixel(&self, index: isize) -> Color {
        let index = wrap(index, self.resolution);
        critical_section::with(|cs| self.state.borrow(cs).borrow().pixels[index])
    }

    /// Rotated color at `index`; `index` wraps around the layer
    pub fn sample(&self, index: isize) -> Color {
        critical_section::with(|cs| self.sample_in(cs, wrap(index, self.resolution)))
    }

    /// Color this layer contributes to `position` of a ring of `led_count`
    /// LEDs
    pub(crate) fn contribution(
        &self,
        cs: CriticalSection<'_>,
        position: usize,
        led_count: usize,
    ) -> Color {
        match self.mode.map(position, self.resolution, led_count) {
            Some(index) => self.sample_in(cs, index % self.resolution),
            None => Color::TRANSPARENT,
        }
    }

    fn sample_in(&self, cs: CriticalSection<'_>, index: usize) -> Color {
        self.state.borrow(cs).borrow().sampled[index]
    }

    fn update(&self, mutate: impl FnOnce(&mut LayerState<N>)) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            mutate(&mut state);
            state.resample(self.resolution);
        });
    }
}

impl<const N: usize> fmt::Debug for Layer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("resolution", &self.resolution)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
