//! Raspberry Pi output line on top of `rppal`.
//!
//! Pins use BCM numbering. BCM GPIO 12 (the default) is physical pin 32.
//!
//! # Example
//!
//! ```ignore
//! use gpio_morse::hal::RpiLine;
//! use gpio_morse::traits::OutputLine;
//!
//! let mut line = RpiLine::open(12)?;
//! line.set_high();
//! ```

use core::fmt;

use rppal::gpio::{Gpio, OutputPin};

use crate::traits::OutputLine;

/// The GPIO line could not be configured as an output.
#[derive(Debug)]
pub struct HardwareInitError {
    /// BCM pin number that was requested.
    pub pin: u8,
    source: rppal::gpio::Error,
}

impl fmt::Display for HardwareInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to configure GPIO {} as output: {}", self.pin, self.source)
    }
}

impl std::error::Error for HardwareInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A BCM GPIO pin configured as an output, starting low.
#[derive(Debug)]
pub struct RpiLine {
    pin: OutputPin,
}

impl RpiLine {
    /// Open the GPIO peripheral and claim `pin` as an output.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareInitError`] if the peripheral is unavailable
    /// (not a Raspberry Pi, missing permissions) or the pin is busy.
    pub fn open(pin: u8) -> Result<Self, HardwareInitError> {
        let err = |source| HardwareInitError { pin, source };
        let mut output = Gpio::new().map_err(err)?.get(pin).map_err(err)?.into_output_low();
        // Leave the pin low if the process exits without a clean shutdown
        output.set_reset_on_drop(true);
        Ok(Self { pin: output })
    }

    /// BCM number of the pin.
    pub fn pin(&self) -> u8 {
        self.pin.pin()
    }
}

impl OutputLine for RpiLine {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}
