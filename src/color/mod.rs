//! Four-channel color model used by layers and the compositor.
//!
//! Channels are stored with 16-bit precision, alpha-premultiplied. Inputs in
//! other representations are converted once, through `From` impls, at
//! the API boundary.

mod blend;
mod convert;

pub use blend::{composite_over, lerp, over, quantize};
pub use convert::{Cmyk, Gray, Nrgba, Nrgba16};
use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Premultiplied RGBA color with 16 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new16(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Self = Self::new16(0, 0, 0, 0xFFFF);
    /// Opaque white
    pub const WHITE: Self = Self::new16(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF);

    /// Create a color from premultiplied 16-bit channels
    pub const fn new16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from premultiplied 8-bit channels
    pub const fn new8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new16(expand8(r), expand8(g), expand8(b), expand8(a))
    }

    /// Create a color from non-premultiplied 8-bit channels
    pub const fn from_nrgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_nrgba16(expand8(r), expand8(g), expand8(b), expand8(a))
    }

    /// Create a color from non-premultiplied 16-bit channels
    pub const fn from_nrgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self::new16(
            premultiply(r, a),
            premultiply(g, a),
            premultiply(b, a),
            a,
        )
    }

    /// Opaque color from 8-bit RGB
    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new8(rgb.r, rgb.g, rgb.b, 0xFF)
    }

    /// Output-depth RGB (premultiplied, alpha dropped)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_rgb8(self) -> Rgb {
        Rgb {
            r: (self.r >> 8) as u8,
            g: (self.g >> 8) as u8,
            b: (self.b >> 8) as u8,
        }
    }

    /// Output-depth alpha
    #[allow(clippy::cast_possible_truncation)]
    pub const fn alpha8(self) -> u8 {
        (self.a >> 8) as u8
    }

    /// Check if the color contributes nothing when composited
    pub const fn is_transparent(self) -> bool {
        self.a == 0 && self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Expand an 8-bit channel to 16 bits (`0xAB` -> `0xABAB`)
#[inline]
#[allow(clippy::cast_lossless)]
pub(crate) const fn expand8(value: u8) -> u16 {
    value as u16 * 0x101
}

#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
const fn premultiply(channel: u16, alpha: u16) -> u16 {
    (channel as u32 * alpha as u32 / 0xFFFF) as u16
}
