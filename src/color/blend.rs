use super::{Color, expand8};

const FULL: u32 = 0xFFFF;

/// Pack a color into the `0x00RRGGBB` layout the LED driver expects
///
/// Each channel keeps its high byte; alpha is dropped.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn quantize(color: Color) -> u32 {
    ((color.r as u32 >> 8) << 16) | ((color.g as u32 >> 8) << 8) | (color.b as u32 >> 8)
}

/// Place `src` over `dst` (source-over, premultiplied)
///
/// The result is truncated to 8-bit output depth.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn over(dst: Color, src: Color) -> Color {
    let inverse = FULL - src.a as u32;
    Color::new16(
        over_channel(src.r, dst.r, inverse),
        over_channel(src.g, dst.g, inverse),
        over_channel(src.b, dst.b, inverse),
        over_channel(src.a, dst.a, inverse),
    )
}

/// Composite an ordered sequence of colors, first one at the bottom
///
/// An empty sequence yields [`Color::TRANSPARENT`].
pub fn composite_over<I>(colors: I) -> Color
where
    I: IntoIterator<Item = Color>,
{
    colors.into_iter().fold(Color::TRANSPARENT, over)
}

/// Linear interpolation from `a` (at `t = 0.0`) to `b` (at `t = 1.0`)
///
/// `t` is clamped to `0.0..=1.0` and quantized to 16 bits before blending.
/// The result is truncated to 8-bit output depth.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp(a: Color, b: Color, t: f64) -> Color {
    let amount = (t.clamp(0.0, 1.0) * f64::from(0xFFFF_u16)) as i64;
    Color::new16(
        lerp_channel(a.r, b.r, amount),
        lerp_channel(a.g, b.g, amount),
        lerp_channel(a.b, b.b, amount),
        lerp_channel(a.a, b.a, amount),
    )
}

#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
const fn over_channel(src: u16, dst: u16, inverse: u32) -> u16 {
    let value = src as u32 + dst as u32 * inverse / FULL;
    let value = value >> 8;
    // Non-premultiplied input (channel above alpha) can overflow
    if value > 0xFF {
        return expand8(0xFF);
    }
    expand8(value as u8)
}

#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
const fn lerp_channel(a: u16, b: u16, amount: i64) -> u16 {
    let a = a as i64;
    let value = a - (a - b as i64) * amount / FULL as i64;
    expand8((value >> 8) as u8)
}

