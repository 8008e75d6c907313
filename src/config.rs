//! Shared configuration for the keyer.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use gpio_morse::config::{Config, LineConfig, TimingConfig};
//!
//! // Use defaults: BCM pin 12, 100ms unit
//! let config = Config::default();
//! assert_eq!(config.line.pin, 12);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_line(LineConfig::default().with_pin(18))
//!     .with_timing(TimingConfig::default().with_wpm(20));
//! assert_eq!(config.timing.to_timing().unit, Duration::from_millis(60));
//! ```

use core::time::Duration;

use heapless::String as HString;

use crate::timing::{Timing, INTRA_CHARACTER_UNITS};

/// Maximum length for short config strings (device names)
pub const MAX_SHORT_STRING: usize = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Create a ShortString from a &str, truncating on a char boundary if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    for c in s.chars() {
        if hs.push(c).is_err() {
            break;
        }
    }
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Output line selection
    pub line: LineConfig,
    /// Keying speed and spacing
    pub timing: TimingConfig,
    /// Device identification
    pub device: DeviceConfig,
}

impl Config {
    /// Set line configuration
    pub fn with_line(mut self, line: LineConfig) -> Self {
        self.line = line;
        self
    }

    /// Set timing configuration
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Set device configuration
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }
}

// ============================================================================
// Line Config
// ============================================================================

/// Output line configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineConfig {
    /// GPIO pin, BCM numbering
    pub pin: u8,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self { pin: 12 }
    }
}

impl LineConfig {
    /// Set the GPIO pin (BCM numbering)
    pub fn with_pin(mut self, pin: u8) -> Self {
        self.pin = pin;
        self
    }
}

// ============================================================================
// Timing Config
// ============================================================================

/// Keying speed configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    /// Length of one time unit (a dot) in milliseconds
    pub unit_ms: u32,
    /// Gap between symbols of one character, in units
    pub intra_gap_units: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            unit_ms: 100,
            intra_gap_units: INTRA_CHARACTER_UNITS,
        }
    }
}

impl TimingConfig {
    /// Set the unit length in milliseconds
    pub fn with_unit_ms(mut self, ms: u32) -> Self {
        self.unit_ms = ms;
        self
    }

    /// Set the unit from a speed in words per minute (PARIS)
    pub fn with_wpm(mut self, wpm: u32) -> Self {
        self.unit_ms = 1200 / wpm.max(1);
        self
    }

    /// Set the gap between symbols of one character, in units
    pub fn with_intra_gap_units(mut self, units: u32) -> Self {
        self.intra_gap_units = units;
        self
    }

    /// Build the timing table
    pub fn to_timing(&self) -> Timing {
        Timing::derive(Duration::from_millis(u64::from(self.unit_ms)))
            .with_intra_character_units(self.intra_gap_units)
    }
}

// ============================================================================
// Device Config
// ============================================================================

/// Device identification
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Human-readable name shown at startup
    pub name: ShortString,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: short_string("gpio-morse"),
        }
    }
}

impl DeviceConfig {
    /// Set the device name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_keyer() {
        let config = Config::default();
        assert_eq!(config.line.pin, 12);
        assert_eq!(config.timing.unit_ms, 100);
        assert_eq!(config.timing.intra_gap_units, 1);
        assert_eq!(config.device.name.as_str(), "gpio-morse");
    }

    #[test]
    fn builder_chain() {
        let config = Config::default()
            .with_line(LineConfig::default().with_pin(23))
            .with_timing(TimingConfig::default().with_unit_ms(50).with_intra_gap_units(2))
            .with_device(DeviceConfig::default().with_name("beacon"));

        assert_eq!(config.line.pin, 23);
        let timing = config.timing.to_timing();
        assert_eq!(timing.unit, Duration::from_millis(50));
        assert_eq!(timing.intra_character_gap, Duration::from_millis(100));
        assert_eq!(timing.inter_word_gap, Duration::from_millis(350));
        assert_eq!(config.device.name.as_str(), "beacon");
    }

    #[test]
    fn wpm_conversion() {
        assert_eq!(TimingConfig::default().with_wpm(20).unit_ms, 60);
        assert_eq!(TimingConfig::default().with_wpm(0).unit_ms, 1200);
    }

    #[test]
    fn short_string_truncates() {
        let long = "x".repeat(100);
        assert_eq!(short_string(&long).len(), MAX_SHORT_STRING);
    }

    #[test]
    fn short_string_respects_char_boundaries() {
        // 63 ASCII bytes + a 2-byte char does not fit in 64
        let mut s = "a".repeat(63);
        s.push('é');
        let hs = short_string(&s);
        assert_eq!(hs.len(), 63);
    }
}
