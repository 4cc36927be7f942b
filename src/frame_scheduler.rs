//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing for the render task without async/await or
//! platform-specific timers. The caller is responsible for sleeping between
//! frames.

use embassy_time::{Duration, Instant};

use crate::device::LedDevice;
use crate::error::Error;
use crate::ring::Ring;

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that owns the ring and paces its renders.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Renders the ring once per tick
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(ring);
///
/// while !stop.is_stopped() {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = scheduler.tick(now)?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D: LedDevice, const N: usize, const L: usize> {
    ring: Ring<'a, D, N, L>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, D: LedDevice, const N: usize, const L: usize> FrameScheduler<'a, D, N, L> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) for frame timing.
    pub fn new(ring: Ring<'a, D, N, L>) -> Self {
        Self::with_frame_duration(ring, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(ring: Ring<'a, D, N, L>, frame_duration: Duration) -> Self {
        Self {
            ring,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the ring
    /// 3. Returns the deadline for the next frame
    ///
    /// A failed render is returned as is and leaves the schedule untouched,
    /// so the caller can retry the frame or give up.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, Error> {
        // Drift correction: if we've fallen more than two frames behind,
        // skip the backlog instead of catching up
        let max_drift = Duration::from_millis(self.frame_duration.as_millis() * 2);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        self.ring.render()?;

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the ring.
    pub fn ring(&self) -> &Ring<'a, D, N, L> {
        &self.ring
    }

    /// Get a mutable reference to the ring.
    pub fn ring_mut(&mut self) -> &mut Ring<'a, D, N, L> {
        &mut self.ring
    }

    /// Stop scheduling and hand the ring back.
    pub fn into_ring(self) -> Ring<'a, D, N, L> {
        self.ring
    }
}
