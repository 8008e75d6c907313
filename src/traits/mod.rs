//! Trait definitions for hardware abstraction.
//!
//! This module defines the core abstractions that allow gpio-morse to:
//! - Run on different hardware (Raspberry Pi, desktop dry run, test mocks)
//! - Swap the time source (tokio timers, instant mock delays)
//!
//! # Hardware Abstraction
//!
//! The key traits are:
//!
//! - [`OutputLine`]: The keyed digital output
//! - [`Delay`]: Async waits for pulses and gaps

pub mod hardware;

pub use hardware::*;
