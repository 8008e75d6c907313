//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `shared`: Line handle shared with the shutdown path
//! - `delay`: Tokio timer delay
//! - `trace`: Logging-only line for dry runs
//! - `rpi`: Raspberry Pi GPIO via rppal (requires `rpi` feature)

#[cfg(feature = "std")]
pub mod delay;
#[cfg(feature = "std")]
pub mod mock;
#[cfg(feature = "std")]
pub mod shared;
pub mod trace;

#[cfg(feature = "rpi")]
pub mod rpi;

#[cfg(feature = "std")]
pub use delay::*;
#[cfg(feature = "std")]
pub use mock::*;
#[cfg(feature = "std")]
pub use shared::*;
pub use trace::*;

#[cfg(feature = "rpi")]
pub use rpi::*;
