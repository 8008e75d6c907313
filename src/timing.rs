//! Timing policy: every duration of a transmission derived from one unit.
//!
//! Standard Morse ratios are used throughout:
//!
//! | Element | Units |
//! |---------|-------|
//! | Dot | 1 |
//! | Dash | 3 |
//! | Gap between symbols of one character | 1 (tunable) |
//! | Gap between characters | 3 |
//! | Gap between words | 7 |
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use gpio_morse::Timing;
//!
//! let timing = Timing::derive(Duration::from_millis(100));
//! assert_eq!(timing.dash, Duration::from_millis(300));
//! assert_eq!(timing.inter_word_gap, Duration::from_millis(700));
//!
//! // 20 WPM (PARIS) is a 60ms unit
//! assert_eq!(Timing::from_wpm(20).unit, Duration::from_millis(60));
//! ```

use core::time::Duration;

use crate::symbols::Symbol;

/// Length of a dot in units.
pub const DOT_UNITS: u32 = 1;
/// Length of a dash in units.
pub const DASH_UNITS: u32 = 3;
/// Default silence between two symbols of the same character, in units.
pub const INTRA_CHARACTER_UNITS: u32 = 1;
/// Silence between two characters of the same word, in units.
pub const INTER_CHARACTER_UNITS: u32 = 3;
/// Silence between words, in units.
pub const INTER_WORD_UNITS: u32 = 7;

/// Default unit length.
pub const DEFAULT_UNIT: Duration = Duration::from_millis(100);

/// Milliseconds in one unit at 1 WPM (the word "PARIS" is 50 units).
const PARIS_MS_PER_WPM: u64 = 1200;

/// Named durations of one transmission.
///
/// All fields are derived from `unit`; changing the unit rescales the
/// whole transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Base time unit.
    pub unit: Duration,
    /// Pulse length of a dot.
    pub dot: Duration,
    /// Pulse length of a dash.
    pub dash: Duration,
    /// Silence between two symbols of one character.
    pub intra_character_gap: Duration,
    /// Silence between two characters of one word.
    pub inter_character_gap: Duration,
    /// Silence between words.
    pub inter_word_gap: Duration,
}

impl Timing {
    /// Derive the standard timing table from a base unit.
    pub const fn derive(unit: Duration) -> Self {
        Self {
            unit,
            dot: scale(unit, DOT_UNITS),
            dash: scale(unit, DASH_UNITS),
            intra_character_gap: scale(unit, INTRA_CHARACTER_UNITS),
            inter_character_gap: scale(unit, INTER_CHARACTER_UNITS),
            inter_word_gap: scale(unit, INTER_WORD_UNITS),
        }
    }

    /// Derive timing for a keying speed in words per minute (PARIS).
    ///
    /// A speed of 0 is treated as 1 WPM.
    pub fn from_wpm(wpm: u32) -> Self {
        let ms = PARIS_MS_PER_WPM / u64::from(wpm.max(1));
        Self::derive(Duration::from_millis(ms))
    }

    /// Override the gap between symbols of one character.
    pub fn with_intra_character_units(mut self, units: u32) -> Self {
        self.intra_character_gap = scale(self.unit, units);
        self
    }

    /// Pulse length for a symbol.
    #[inline]
    pub const fn duration_of(&self, symbol: Symbol) -> Duration {
        match symbol {
            Symbol::Dot => self.dot,
            Symbol::Dash => self.dash,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::derive(DEFAULT_UNIT)
    }
}

/// Free-function form of [`Timing::derive`].
pub const fn derive_timing(unit: Duration) -> Timing {
    Timing::derive(unit)
}

const fn scale(unit: Duration, units: u32) -> Duration {
    // Duration * u32 is not const; saturate instead of panicking
    match unit.checked_mul(units) {
        Some(d) => d,
        None => Duration::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_hold_for_several_units() {
        for ms in [1u64, 7, 60, 100, 1234] {
            let unit = Duration::from_millis(ms);
            let t = Timing::derive(unit);
            assert_eq!(t.dot, unit);
            assert_eq!(t.dash, t.dot * 3);
            assert_eq!(t.dash, unit * 3);
            assert_eq!(t.intra_character_gap, unit);
            assert_eq!(t.inter_character_gap, unit * 3);
            assert_eq!(t.inter_word_gap, unit * 7);
        }
    }

    #[test]
    fn sub_millisecond_unit_for_fast_tests() {
        let t = Timing::derive(Duration::from_micros(10));
        assert_eq!(t.inter_word_gap, Duration::from_micros(70));
    }

    #[test]
    fn zero_unit_is_all_zero() {
        let t = Timing::derive(Duration::ZERO);
        assert_eq!(t.dash, Duration::ZERO);
        assert_eq!(t.inter_word_gap, Duration::ZERO);
    }

    #[test]
    fn default_is_hundred_millis() {
        let t = Timing::default();
        assert_eq!(t.unit, Duration::from_millis(100));
        assert_eq!(t, derive_timing(DEFAULT_UNIT));
    }

    #[test]
    fn from_wpm_uses_paris() {
        assert_eq!(Timing::from_wpm(20).unit, Duration::from_millis(60));
        assert_eq!(Timing::from_wpm(12).unit, Duration::from_millis(100));
        assert_eq!(Timing::from_wpm(0).unit, Duration::from_millis(1200));
    }

    #[test]
    fn intra_gap_is_tunable() {
        let t = Timing::derive(Duration::from_millis(10)).with_intra_character_units(2);
        assert_eq!(t.intra_character_gap, Duration::from_millis(20));
        // Other durations untouched
        assert_eq!(t.inter_character_gap, Duration::from_millis(30));

        let none = t.with_intra_character_units(0);
        assert_eq!(none.intra_character_gap, Duration::ZERO);
    }

    #[test]
    fn duration_of_symbol() {
        let t = Timing::derive(Duration::from_millis(50));
        assert_eq!(t.duration_of(Symbol::Dot), Duration::from_millis(50));
        assert_eq!(t.duration_of(Symbol::Dash), Duration::from_millis(150));
    }

    #[test]
    fn huge_unit_saturates() {
        let t = Timing::derive(Duration::MAX);
        assert_eq!(t.inter_word_gap, Duration::MAX);
    }
}
