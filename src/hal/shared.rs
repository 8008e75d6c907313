//! Output line shared between the transmission engine and the shutdown
//! path.
//!
//! The engine owns one handle and drives pulses through it; the
//! [`ShutdownCoordinator`](crate::shutdown::ShutdownCoordinator) owns a
//! clone so it can force the line low without waiting for the engine.
//!
//! # Example
//!
//! ```rust
//! use gpio_morse::hal::{MockTimeline, SharedLine};
//! use gpio_morse::traits::{LineState, OutputLine};
//!
//! let timeline = MockTimeline::new();
//! let mut engine_side = SharedLine::new(timeline.line());
//! let mut supervisor_side = engine_side.clone();
//!
//! engine_side.set_high();
//! supervisor_side.force_low();
//! assert_eq!(timeline.line_state(), LineState::Low);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::OutputLine;

/// Cloneable handle to one output line.
///
/// Every write takes a short lock, so writes from the engine and the
/// shutdown path never interleave inside a single transition.
#[derive(Debug)]
pub struct SharedLine<L> {
    inner: Arc<Mutex<L>>,
}

impl<L> Clone for SharedLine<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: OutputLine> SharedLine<L> {
    /// Wrap a configured line.
    pub fn new(line: L) -> Self {
        Self {
            inner: Arc::new(Mutex::new(line)),
        }
    }

    /// Run a closure with exclusive access to the underlying line.
    pub fn with_line<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, L> {
        // A panic while holding the lock cannot leave a pin half-written
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: OutputLine> OutputLine for SharedLine<L> {
    fn set_high(&mut self) {
        self.lock().set_high();
    }

    fn set_low(&mut self) {
        self.lock().set_low();
    }

    fn force_low(&mut self) {
        self.lock().force_low();
    }
}
