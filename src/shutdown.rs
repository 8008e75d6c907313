//! Shutdown coordinator: turns an external stop request into a cancelled
//! transmission and a low output line.
//!
//! The coordinator runs beside the transmission engine. When the request
//! arrives it sets the shared [`CancelSignal`] and, without waiting for the
//! engine to notice, forces the line low through its own [`SharedLine`]
//! handle. Both sides writing low is harmless.
//!
//! # Example
//!
//! ```rust
//! use gpio_morse::hal::{MockTimeline, SharedLine};
//! use gpio_morse::shutdown::ShutdownCoordinator;
//! use gpio_morse::traits::{LineState, OutputLine};
//! use gpio_morse::CancelSignal;
//!
//! let timeline = MockTimeline::new();
//! let mut line = SharedLine::new(timeline.line());
//! let cancel = CancelSignal::new();
//! let coordinator = ShutdownCoordinator::new(cancel.clone(), line.clone());
//!
//! line.set_high();
//! coordinator.trigger();
//!
//! assert!(cancel.is_cancelled());
//! assert_eq!(timeline.line_state(), LineState::Low);
//! ```

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cancel::CancelSignal;
use crate::hal::SharedLine;
use crate::traits::OutputLine;

/// Supervisor that cancels a transmission and forces the line low.
#[derive(Debug)]
pub struct ShutdownCoordinator<L: OutputLine> {
    cancel: CancelSignal,
    line: SharedLine<L>,
}

impl<L: OutputLine> Clone for ShutdownCoordinator<L> {
    fn clone(&self) -> Self {
        Self {
            cancel: self.cancel.clone(),
            line: self.line.clone(),
        }
    }
}

impl<L: OutputLine> ShutdownCoordinator<L> {
    /// Create a coordinator for the engine that checks `cancel` and drives
    /// `line`.
    pub fn new(cancel: CancelSignal, line: SharedLine<L>) -> Self {
        Self { cancel, line }
    }

    /// The flag this coordinator sets.
    pub fn cancel_signal(&self) -> &CancelSignal {
        &self.cancel
    }

    /// Cancel the transmission, then force the line low.
    pub fn trigger(&self) {
        self.cancel.cancel();
        self.line.clone().force_low();
    }

    /// Wait for `request` to resolve, then [`trigger`](Self::trigger).
    pub async fn run<F>(self, request: F)
    where
        F: Future<Output = ()>,
    {
        request.await;
        info!("shutdown requested, forcing line low");
        self.trigger();
    }
}

impl<L: OutputLine + Send + 'static> ShutdownCoordinator<L> {
    /// Spawn a task that triggers on Ctrl-C (SIGINT).
    ///
    /// Must be called from within a tokio runtime. Abort the returned
    /// handle once the transmission finished normally.
    pub fn spawn_on_ctrl_c(self) -> JoinHandle<()> {
        tokio::spawn(self.run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // No handler: never fire
                warn!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        }))
    }
}
