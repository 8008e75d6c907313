//! Hardware abstraction traits for the keyed output line and timed waits.
//!
//! This module defines the two collaborator interfaces the keyer core
//! drives. Everything above them (symbol lookup, timing, the transmission
//! engine) is platform independent.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`OutputLine`] | One configured digital output (set high / set low) |
//! | [`Delay`] | Async wait for a fixed duration |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal`]. On a Raspberry Pi, use `hal::RpiLine`
//! (requires the `rpi` feature).
//!
//! # Example
//!
//! ```rust
//! use gpio_morse::traits::{LineState, OutputLine};
//! use gpio_morse::hal::MockTimeline;
//!
//! let timeline = MockTimeline::new();
//! let mut line = timeline.line();
//! line.set_high();
//! assert_eq!(timeline.line_state(), LineState::High);
//!
//! line.force_low();
//! assert_eq!(timeline.line_state(), LineState::Low);
//! ```

use core::future::Future;
use core::time::Duration;

/// Logical level of the output line.
///
/// # Default
///
/// Defaults to [`Low`](Self::Low), which is the idle (key up) level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineState {
    /// Key down, a pulse is in progress.
    High,
    /// Key up.
    #[default]
    Low,
}

impl LineState {
    /// Returns the state as a lowercase string.
    ///
    /// ```
    /// use gpio_morse::traits::LineState;
    ///
    /// assert_eq!(LineState::High.as_str(), "high");
    /// assert_eq!(LineState::Low.as_str(), "low");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineState::High => "high",
            LineState::Low => "low",
        }
    }
}

/// A single pre-configured, output-capable digital line.
///
/// The keyer only ever needs two operations on the line. Implementations
/// are expected to be infallible once the line has been configured;
/// configuration errors belong to the constructor of the implementation
/// (see `hal::RpiLine::open`).
///
/// # Example Implementation
///
/// ```rust,ignore
/// use gpio_morse::traits::OutputLine;
///
/// struct Led { /* pin handle */ }
///
/// impl OutputLine for Led {
///     fn set_high(&mut self) {
///         // Drive the pin high...
///     }
///
///     fn set_low(&mut self) {
///         // Drive the pin low...
///     }
/// }
/// ```
pub trait OutputLine {
    /// Drive the line high (key down).
    fn set_high(&mut self);

    /// Drive the line low (key up).
    fn set_low(&mut self);

    /// Drive the line low regardless of what the caller was doing.
    ///
    /// Used on every terminal transition of a transmission and by the
    /// shutdown path. Setting low twice is harmless.
    fn force_low(&mut self) {
        self.set_low();
    }
}

impl<L: OutputLine + ?Sized> OutputLine for &mut L {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn force_low(&mut self) {
        (**self).force_low();
    }
}

/// Async delay used for every suspension point of a transmission.
///
/// On desktop and Linux boards this wraps `tokio::time::sleep`
/// (`hal::TokioDelay`). Tests use `hal::MockDelay`, which completes
/// instantly and records the requested duration.
pub trait Delay {
    /// Wait for the given duration.
    fn delay(&mut self, duration: Duration) -> impl Future<Output = ()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // =========================================================================
    // LineState Tests
    // =========================================================================

    #[test]
    fn line_state_default_is_low() {
        assert_eq!(LineState::default(), LineState::Low);
    }

    #[test]
    fn line_state_as_str() {
        assert_eq!(LineState::High.as_str(), "high");
        assert_eq!(LineState::Low.as_str(), "low");
    }

    // =========================================================================
    // OutputLine Default Methods Tests
    // =========================================================================

    #[derive(Default)]
    struct RecordingLine {
        writes: Vec<LineState>,
    }

    impl OutputLine for RecordingLine {
        fn set_high(&mut self) {
            self.writes.push(LineState::High);
        }

        fn set_low(&mut self) {
            self.writes.push(LineState::Low);
        }
    }

    #[test]
    fn force_low_default_impl_sets_low() {
        let mut line = RecordingLine::default();
        line.set_high();
        line.force_low();
        assert_eq!(line.writes, [LineState::High, LineState::Low]);
    }

    #[test]
    fn mutable_reference_forwards_to_line() {
        fn pulse(mut line: impl OutputLine) {
            line.set_high();
            line.force_low();
        }

        let mut line = RecordingLine::default();
        pulse(&mut line);
        assert_eq!(line.writes, [LineState::High, LineState::Low]);
    }
}
