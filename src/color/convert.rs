//! Conversions from the color representations accepted at the API boundary.

use smart_leds::hsv::hsv2rgb;

use super::{Color, Hsv, Rgb, expand8};

/// Non-premultiplied 8-bit RGBA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nrgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Nrgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Non-premultiplied 16-bit RGBA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nrgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Nrgba16 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }
}

/// Opaque 8-bit gray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gray(pub u8);

/// Opaque CMYK color, 8 bits per ink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::opaque(hsv2rgb(hsv))
    }
}

impl From<Nrgba> for Color {
    fn from(c: Nrgba) -> Self {
        Self::from_nrgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<Nrgba16> for Color {
    fn from(c: Nrgba16) -> Self {
        Self::from_nrgba16(c.r, c.g, c.b, c.a)
    }
}

impl From<Gray> for Color {
    fn from(gray: Gray) -> Self {
        let y = expand8(gray.0);
        Self::new16(y, y, y, 0xFFFF)
    }
}

impl From<Cmyk> for Color {
    #[allow(clippy::cast_possible_truncation)]
    fn from(cmyk: Cmyk) -> Self {
        let white = u32::from(0xFFFF - expand8(cmyk.k));
        let ink = |value: u8| (u32::from(0xFFFF - expand8(value)) * white / 0xFFFF) as u16;
        Self::new16(ink(cmyk.c), ink(cmyk.m), ink(cmyk.y), 0xFFFF)
    }
}
