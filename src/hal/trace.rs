//! Output line that only logs, for dry runs on machines without GPIO.

use tracing::trace;

use crate::traits::{LineState, OutputLine};

/// Logs every transition at `trace` level instead of touching hardware.
///
/// ```rust
/// use gpio_morse::hal::TraceLine;
/// use gpio_morse::traits::{LineState, OutputLine};
///
/// let mut line = TraceLine::new(12);
/// line.set_high();
/// assert_eq!(line.state(), LineState::High);
/// assert_eq!(line.transitions(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TraceLine {
    pin: u8,
    state: LineState,
    transitions: u64,
}

impl TraceLine {
    /// Creates a dry-run line labelled with the pin it stands in for.
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            ..Self::default()
        }
    }

    /// Current level.
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Number of low-to-high transitions so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    fn write(&mut self, state: LineState) {
        if state == LineState::High && self.state == LineState::Low {
            self.transitions += 1;
        }
        self.state = state;
        trace!(pin = self.pin, level = state.as_str(), "line");
    }
}

impl OutputLine for TraceLine {
    fn set_high(&mut self) {
        self.write(LineState::High);
    }

    fn set_low(&mut self) {
        self.write(LineState::Low);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_rising_edges_only() {
        let mut line = TraceLine::new(4);
        line.set_high();
        line.set_high();
        line.set_low();
        line.set_low();
        line.set_high();
        assert_eq!(line.transitions(), 2);
        assert_eq!(line.state(), LineState::High);
    }
}
