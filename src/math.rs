//! Index and angle math shared by layers and the ring.
//!
//! Every index in the crate goes through [`wrap`], and every continuous angle
//! goes through [`Rotation::from_angle`], so layers and the ring round the
//! same way.

use core::f64::consts::TAU;

/// Wrap a signed index into `0..len`
///
/// `len` must be non-zero.
#[inline]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn wrap(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Rescale `index` from a `0..from` range to a `0..to` range using floor
/// division
///
/// `from` must be non-zero.
#[inline]
pub const fn scale(index: usize, from: usize, to: usize) -> usize {
    index * to / from
}

/// Continuous angle decomposed into a whole pixel shift and a sub-pixel
/// blend weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Whole pixel shift, already wrapped into `0..resolution`
    pub shift: usize,
    /// Fraction of the next pixel to blend in (`0.0 <= weight < 1.0`)
    pub weight: f64,
}

impl Rotation {
    /// No rotation
    pub const IDENTITY: Self = Self {
        shift: 0,
        weight: 0.0,
    };

    /// Decompose `angle` (radians) for a circle of `resolution` pixels
    ///
    /// The shift is `floor(angle / arc)` for both signs, with
    /// `arc = 2π / resolution`: `-arc / 2` gives a shift of `-1` (stored as
    /// `resolution - 1`) and a weight of `0.5`. Non-finite angles decompose
    /// to [`Rotation::IDENTITY`].
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn from_angle(angle: f64, resolution: usize) -> Self {
        if resolution == 0 || !angle.is_finite() {
            return Self::IDENTITY;
        }

        let steps = angle * resolution as f64 / TAU;
        let mut whole = libm::floor(steps);
        let mut weight = steps - whole;
        if weight >= 1.0 {
            // Tiny negative steps: `steps - floor(steps)` rounds up to 1.0
            whole += 1.0;
            weight = 0.0;
        }

        let turns = resolution as f64;
        let mut shift = libm::fmod(whole, turns);
        if shift < 0.0 {
            shift += turns;
        }
        let shift = (shift as usize) % resolution;

        Self { shift, weight }
    }
}
