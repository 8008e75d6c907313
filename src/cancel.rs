//! Cooperative cancellation flag shared between the transmission engine
//! and whoever wants to stop it.
//!
//! The engine checks the flag before every suspension point (each pulse
//! and each gap). A pulse that has already started always completes.
//!
//! ```rust
//! use gpio_morse::CancelSignal;
//!
//! let cancel = CancelSignal::new();
//! let handle = cancel.clone();
//! assert!(!cancel.is_cancelled());
//!
//! handle.cancel();
//! assert!(cancel.is_cancelled());
//! ```

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// Cloneable cancellation flag. All clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
    flag: Arc<AtomicBool>,
}

impl CancelSignal {
    /// Create a flag that is not yet set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) was called on any clone.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
