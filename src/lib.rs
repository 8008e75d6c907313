//! # gpio-morse
//!
//! A Morse code keyer that converts a text message into timed on/off
//! pulses on a single digital output line, such as a pin on a
//! single-board computer's GPIO header.
//!
//! ## Features
//!
//! - **Standard timing**: dot 1 unit, dash 3, symbol gap 1 (tunable),
//!   character gap 3, word gap 7, all derived from one unit
//! - **Hardware abstraction**: Traits for the output line and delays
//! - **Cooperative cancellation**: Checked before every pulse and gap
//! - **Safe shutdown**: A supervisor forces the line low on Ctrl-C
//! - **Typed errors**: Unsupported characters stop the run and are reported
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Output line and delay abstractions
//! - `symbols` - International Morse Code table
//! - `timing` - Durations derived from the base unit
//! - `pulse` - One key-down interval per symbol
//! - `engine` - Walks a message and keys it
//! - `shutdown` - Signal-driven cancellation and forced-low fallback
//! - `hal` - Concrete implementations (mock for testing, rpi for hardware)
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use gpio_morse::{hal::MockTimeline, CancelSignal, Outcome, Timing, Transmitter};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! // Create a keyer on a mock line
//! let timeline = MockTimeline::new();
//! let timing = Timing::derive(Duration::from_millis(100));
//! let mut keyer = Transmitter::new(timeline.line(), timeline.delay(), timing);
//!
//! // Key a message
//! let outcome = keyer.transmit("sos", &CancelSignal::new()).await.unwrap();
//! assert_eq!(outcome, Outcome::Completed);
//! # });
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Cooperative cancellation flag.
pub mod cancel;
/// Shared configuration system.
pub mod config;
/// Transmission engine and session lifecycle.
pub mod engine;
/// Error types.
pub mod error;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Pulse driver for single symbols.
pub mod pulse;
/// Morse symbol table and text rendering.
pub mod symbols;
/// Timing policy derived from one unit.
pub mod timing;
/// Core traits for hardware abstraction.
pub mod traits;

/// Signal-driven shutdown coordination.
#[cfg(feature = "std")]
pub mod shutdown;

// Re-exports for convenience
pub use cancel::CancelSignal;
pub use config::{Config, DeviceConfig, LineConfig, TimingConfig};
pub use engine::{Outcome, Session, SessionState, Transmitter};
pub use error::TransmitError;
pub use symbols::{lookup, render, Symbol};
pub use timing::{derive_timing, Timing};
pub use traits::{Delay, LineState, OutputLine};

#[cfg(feature = "std")]
pub use shutdown::ShutdownCoordinator;
