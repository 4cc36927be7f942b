//! Portable task signals for `no_std` environments.
//!
//! Flags shared between animation tasks and the render task, built on
//! `critical-section`. Thread/interrupt safe via critical sections.

use core::cell::Cell;

use critical_section::Mutex;

/// One-way stop flag observed by animation tasks
///
/// Once stopped, it stays stopped until [`StopSignal::reset`].
pub struct StopSignal {
    stopped: Mutex<Cell<bool>>,
}

impl StopSignal {
    /// Create a new signal in the running state.
    pub const fn new() -> Self {
        Self {
            stopped: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask every observer to stop.
    pub fn stop(&self) {
        critical_section::with(|cs| self.stopped.borrow(cs).set(true));
    }

    /// Check if a stop was requested.
    pub fn is_stopped(&self) -> bool {
        critical_section::with(|cs| self.stopped.borrow(cs).get())
    }

    /// Return to the running state.
    pub fn reset(&self) {
        critical_section::with(|cs| self.stopped.borrow(cs).set(false));
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Coalescing render request
///
/// Any number of animation tasks may raise it; the render task takes it and
/// renders once, however many requests piled up in between.
pub struct RenderRequest {
    pending: Mutex<Cell<bool>>,
}

impl RenderRequest {
    /// Create a new request with nothing pending.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask the render task for a new frame.
    pub fn request(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Clear the request and return whether one was pending.
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).replace(false))
    }

    /// Check for a pending request without clearing it.
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self::new()
    }
}
