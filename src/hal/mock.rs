//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the hardware traits, enabling
//! development and testing on desktop without a GPIO header.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockLine`] | [`OutputLine`] | Records high/low transitions |
//! | [`MockDelay`] | [`Delay`] | Records waits, completes instantly |
//!
//! Both are handed out by a [`MockTimeline`], which keeps one ordered log
//! of everything that happened on the line, so tests can assert exact
//! pulse and gap sequences.
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use gpio_morse::{hal::MockTimeline, CancelSignal, Outcome, Timing, Transmitter};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let timeline = MockTimeline::new();
//! let timing = Timing::derive(Duration::from_millis(1));
//! let mut tx = Transmitter::new(timeline.line(), timeline.delay(), timing);
//!
//! let outcome = tx.transmit("e", &CancelSignal::new()).await.unwrap();
//! assert_eq!(outcome, Outcome::Completed);
//! assert_eq!(timeline.pulses(), [Duration::from_millis(1)]);
//! # });
//! ```
//!
//! [`OutputLine`]: crate::traits::OutputLine
//! [`Delay`]: crate::traits::Delay

use std::future::{ready, Future};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cancel::CancelSignal;
use crate::traits::{Delay, LineState, OutputLine};

// ============================================================================
// Timeline
// ============================================================================

/// One recorded step on a [`MockTimeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockEvent {
    /// The line was driven high.
    High,
    /// The line was driven low.
    Low,
    /// A delay of the given length was requested.
    Wait(Duration),
}

#[derive(Debug, Default)]
struct Log {
    events: Vec<MockEvent>,
    state: LineState,
    waits: usize,
}

/// Shared, ordered record of line transitions and waits.
///
/// Clones share the same log.
///
/// # Example
///
/// ```rust
/// use gpio_morse::hal::{MockEvent, MockTimeline};
/// use gpio_morse::traits::OutputLine;
///
/// let timeline = MockTimeline::new();
/// let mut line = timeline.line();
/// line.set_high();
/// line.set_low();
///
/// assert_eq!(timeline.events(), [MockEvent::High, MockEvent::Low]);
/// assert_eq!(timeline.high_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockTimeline {
    log: Arc<Mutex<Log>>,
}

impl MockTimeline {
    /// Creates an empty timeline with the line low.
    pub fn new() -> Self {
        Self::default()
    }

    /// A line that records into this timeline.
    pub fn line(&self) -> MockLine {
        MockLine {
            log: Arc::clone(&self.log),
        }
    }

    /// A delay that records into this timeline.
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            log: Arc::clone(&self.log),
            cancel_at: None,
        }
    }

    /// Every recorded event, oldest first.
    pub fn events(&self) -> Vec<MockEvent> {
        self.lock().events.clone()
    }

    /// Current level of the line.
    pub fn line_state(&self) -> LineState {
        self.lock().state
    }

    /// Number of times the line was driven high.
    pub fn high_count(&self) -> usize {
        self.lock()
            .events
            .iter()
            .filter(|e| **e == MockEvent::High)
            .count()
    }

    /// Lengths of the waits made while the line was high, in order.
    pub fn pulses(&self) -> Vec<Duration> {
        self.waits_while(LineState::High)
    }

    /// Lengths of the waits made while the line was low, in order.
    pub fn gaps(&self) -> Vec<Duration> {
        self.waits_while(LineState::Low)
    }

    /// Sum of every wait, i.e. the virtual duration of the run.
    pub fn elapsed(&self) -> Duration {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                MockEvent::Wait(d) => Some(*d),
                _ => None,
            })
            .sum()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        let mut log = self.lock();
        log.events.clear();
        log.waits = 0;
    }

    fn waits_while(&self, level: LineState) -> Vec<Duration> {
        let log = self.lock();
        let mut state = LineState::Low;
        let mut out = Vec::new();
        for event in &log.events {
            match event {
                MockEvent::High => state = LineState::High,
                MockEvent::Low => state = LineState::Low,
                MockEvent::Wait(d) if state == level => out.push(*d),
                MockEvent::Wait(_) => {}
            }
        }
        out
    }

    fn lock(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Hardware Mocks
// ============================================================================

/// Mock output line.
///
/// Obtain one from [`MockTimeline::line`].
#[derive(Clone, Debug)]
pub struct MockLine {
    log: Arc<Mutex<Log>>,
}

impl MockLine {
    fn record(&self, state: LineState) {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        log.state = state;
        log.events.push(match state {
            LineState::High => MockEvent::High,
            LineState::Low => MockEvent::Low,
        });
    }
}

impl OutputLine for MockLine {
    fn set_high(&mut self) {
        self.record(LineState::High);
    }

    fn set_low(&mut self) {
        self.record(LineState::Low);
    }
}

/// Mock delay that completes immediately.
///
/// Obtain one from [`MockTimeline::delay`]. Can raise a [`CancelSignal`]
/// while a given wait is in progress to simulate an interrupt arriving
/// mid-message.
///
/// # Example
///
/// ```rust
/// use core::time::Duration;
/// use gpio_morse::{hal::MockTimeline, traits::Delay, CancelSignal};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let timeline = MockTimeline::new();
/// let cancel = CancelSignal::new();
/// let mut delay = timeline.delay().cancel_after(2, cancel.clone());
///
/// delay.delay(Duration::from_millis(5)).await;
/// assert!(!cancel.is_cancelled());
///
/// delay.delay(Duration::from_millis(5)).await;
/// assert!(cancel.is_cancelled());
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct MockDelay {
    log: Arc<Mutex<Log>>,
    cancel_at: Option<(usize, CancelSignal)>,
}

impl MockDelay {
    /// Cancel `signal` during the `nth` wait recorded on the timeline
    /// (1-based, counting waits from every delay of the timeline).
    pub fn cancel_after(mut self, nth: usize, signal: CancelSignal) -> Self {
        self.cancel_at = Some((nth, signal));
        self
    }
}

impl Delay for MockDelay {
    fn delay(&mut self, duration: Duration) -> impl Future<Output = ()> {
        let count = {
            let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
            log.events.push(MockEvent::Wait(duration));
            log.waits += 1;
            log.waits
        };
        if let Some((nth, signal)) = &self.cancel_at {
            if count >= *nth {
                signal.cancel();
            }
        }
        ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_tracks_state() {
        let timeline = MockTimeline::new();
        let mut line = timeline.line();
        assert_eq!(timeline.line_state(), LineState::Low);

        line.set_high();
        assert_eq!(timeline.line_state(), LineState::High);

        line.set_low();
        assert_eq!(timeline.line_state(), LineState::Low);
    }

    #[tokio::test]
    async fn pulses_and_gaps_are_split_by_level() {
        let timeline = MockTimeline::new();
        let (mut line, mut delay) = (timeline.line(), timeline.delay());
        let ms = Duration::from_millis;

        delay.delay(ms(7)).await;
        line.set_high();
        delay.delay(ms(1)).await;
        line.set_low();
        delay.delay(ms(3)).await;

        assert_eq!(timeline.pulses(), [ms(1)]);
        assert_eq!(timeline.gaps(), [ms(7), ms(3)]);
        assert_eq!(timeline.elapsed(), ms(11));
    }

    #[tokio::test]
    async fn clones_share_one_log() {
        let timeline = MockTimeline::new();
        let mut a = timeline.line();
        let mut b = timeline.clone().line();

        a.set_high();
        b.set_low();

        assert_eq!(timeline.events(), [MockEvent::High, MockEvent::Low]);
    }

    #[tokio::test]
    async fn cancel_after_counts_all_waits() {
        let timeline = MockTimeline::new();
        let cancel = CancelSignal::new();
        let mut first = timeline.delay();
        let mut second = timeline.delay().cancel_after(2, cancel.clone());

        first.delay(Duration::ZERO).await;
        assert!(!cancel.is_cancelled());
        second.delay(Duration::ZERO).await;
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn clear_resets_log_but_not_level() {
        let timeline = MockTimeline::new();
        let mut line = timeline.line();
        line.set_high();
        timeline.clear();

        assert!(timeline.events().is_empty());
        assert_eq!(timeline.line_state(), LineState::High);
    }
}
