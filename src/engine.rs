//! Transmission engine: walks a message and keys it on the output line.
//!
//! This module provides [`Transmitter`], which owns the output line, the
//! delay source and the timing table, and [`Session`], one run over one
//! message.
//!
//! # Overview
//!
//! For every character of the message, in order:
//! - Whitespace: one inter-word gap per whitespace run
//! - Letter or digit (case-folded): its symbols, separated by the
//!   intra-character gap
//! - Anything else: the session fails with
//!   [`TransmitError::UnsupportedCharacter`]
//!
//! Gaps go *between* elements. The inter-character gap after a character
//! is only waited once the next character (or the end of the message) is
//! reached, and a whitespace run replaces it with a single inter-word gap.
//! The silence between words is therefore exactly the inter-word gap,
//! never inter-character plus inter-word.
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use gpio_morse::{hal::MockTimeline, CancelSignal, Outcome, Timing, Transmitter};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let timeline = MockTimeline::new();
//! let timing = Timing::derive(Duration::from_millis(10));
//! let mut tx = Transmitter::new(timeline.line(), timeline.delay(), timing);
//!
//! let outcome = tx.transmit("SOS", &CancelSignal::new()).await.unwrap();
//! assert_eq!(outcome, Outcome::Completed);
//! assert_eq!(timeline.pulses().len(), 9);
//! # });
//! ```
//!
//! # Cancellation
//!
//! The [`CancelSignal`] is checked before every pulse and every gap. Once
//! it is set the session stops at the next check, drives the line low and
//! returns [`Outcome::Cancelled`]. A pulse that already started finishes.

use core::time::Duration;

use tracing::{debug, info, warn};

use crate::cancel::CancelSignal;
use crate::error::TransmitError;
use crate::pulse;
use crate::symbols::lookup;
use crate::timing::Timing;
use crate::traits::{Delay, LineState, OutputLine};

/// How a session that did not fail ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// The whole message was keyed.
    Completed,
    /// Stopped on request before the end of the message.
    Cancelled,
}

/// Lifecycle of a [`Session`].
///
/// `Idle → Transmitting → {Completed, Cancelled, Failed}`. Terminal
/// states are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SessionState {
    /// Created, not started.
    #[default]
    Idle,
    /// Keying in progress.
    Transmitting,
    /// Message exhausted.
    Completed,
    /// Stopped by a cancellation request.
    Cancelled,
    /// Stopped by an unsupported character.
    Failed,
}

impl SessionState {
    /// Returns the state as a lowercase string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Transmitting => "transmitting",
            SessionState::Completed => "completed",
            SessionState::Cancelled => "cancelled",
            SessionState::Failed => "failed",
        }
    }

    /// Returns true for `Completed`, `Cancelled` and `Failed`.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Completed | SessionState::Cancelled | SessionState::Failed
        )
    }
}

/// Keyer bound to one output line.
///
/// # Type Parameters
///
/// - `L`: The output line ([`OutputLine`] trait)
/// - `D`: The delay source ([`Delay`] trait)
///
/// Timing is fixed at construction; there is no process-wide state.
pub struct Transmitter<L: OutputLine, D: Delay> {
    line: L,
    delay: D,
    timing: Timing,
}

impl<L: OutputLine, D: Delay> Transmitter<L, D> {
    /// Create a keyer. The line is driven low immediately.
    pub fn new(mut line: L, delay: D, timing: Timing) -> Self {
        line.set_low();
        Self {
            line,
            delay,
            timing,
        }
    }

    /// The timing table in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Start a fresh session over `message`.
    pub fn session<'a>(&'a mut self, message: &'a str) -> Session<'a, L, D> {
        Session {
            transmitter: self,
            message,
            state: SessionState::Idle,
            line: LineState::Low,
        }
    }

    /// Key `message` in a fresh session.
    ///
    /// # Errors
    ///
    /// [`TransmitError::UnsupportedCharacter`] if the message contains a
    /// character outside letters, digits and whitespace. Everything before
    /// it has already been keyed; nothing after it is.
    pub async fn transmit(
        &mut self,
        message: &str,
        cancel: &CancelSignal,
    ) -> Result<Outcome, TransmitError> {
        self.session(message).run(cancel).await
    }

    /// Give back the line and the delay.
    pub fn into_parts(self) -> (L, D) {
        (self.line, self.delay)
    }
}

/// One transmission of one message.
///
/// A session runs at most once; create a new one with
/// [`Transmitter::session`] to send again.
pub struct Session<'a, L: OutputLine, D: Delay> {
    transmitter: &'a mut Transmitter<L, D>,
    message: &'a str,
    state: SessionState,
    line: LineState,
}

impl<L: OutputLine, D: Delay> Session<'_, L, D> {
    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Level the session last drove the line to.
    pub fn line_state(&self) -> LineState {
        self.line
    }

    /// Key the message.
    ///
    /// The line is low when this returns, whatever the result.
    ///
    /// # Errors
    ///
    /// - [`TransmitError::UnsupportedCharacter`] on an unmapped character
    /// - [`TransmitError::SessionClosed`] if the session already ran
    pub async fn run(&mut self, cancel: &CancelSignal) -> Result<Outcome, TransmitError> {
        if self.state != SessionState::Idle {
            return Err(TransmitError::SessionClosed(self.state));
        }

        self.state = SessionState::Transmitting;
        info!(chars = self.message.chars().count(), "transmission started");

        let result = self.key_message(cancel).await;

        self.transmitter.line.force_low();
        self.line = LineState::Low;
        self.state = match &result {
            Ok(Outcome::Completed) => SessionState::Completed,
            Ok(Outcome::Cancelled) => SessionState::Cancelled,
            Err(_) => SessionState::Failed,
        };

        match &result {
            Ok(Outcome::Completed) => info!("transmission completed"),
            Ok(Outcome::Cancelled) => warn!("transmission cancelled"),
            Err(e) => warn!(error = %e, "transmission failed"),
        }
        result
    }

    async fn key_message(&mut self, cancel: &CancelSignal) -> Result<Outcome, TransmitError> {
        let timing = self.transmitter.timing;
        let message = self.message;
        let mut pending_gap: Option<Duration> = None;
        let mut in_word_gap = false;

        for c in message.chars() {
            if c.is_whitespace() {
                if !in_word_gap {
                    in_word_gap = true;
                    // Replaces the inter-character gap still owed
                    pending_gap = None;
                    debug!("word gap");
                    if !self.pause(timing.inter_word_gap, cancel).await {
                        return Ok(Outcome::Cancelled);
                    }
                }
                continue;
            }
            in_word_gap = false;

            let Some(symbols) = lookup(c.to_ascii_lowercase()) else {
                return Err(TransmitError::UnsupportedCharacter(c));
            };

            if let Some(gap) = pending_gap.take() {
                if !self.pause(gap, cancel).await {
                    return Ok(Outcome::Cancelled);
                }
            }

            debug!(character = %c, symbols = symbols.len(), "keying character");
            for (i, symbol) in symbols.iter().enumerate() {
                if i > 0 && !self.pause(timing.intra_character_gap, cancel).await {
                    return Ok(Outcome::Cancelled);
                }
                if cancel.is_cancelled() {
                    return Ok(Outcome::Cancelled);
                }

                let tx = &mut *self.transmitter;
                self.line = LineState::High;
                pulse::emit(*symbol, &timing, &mut tx.line, &mut tx.delay).await;
                self.line = LineState::Low;
            }
            pending_gap = Some(timing.inter_character_gap);
        }

        if let Some(gap) = pending_gap {
            if !self.pause(gap, cancel).await {
                return Ok(Outcome::Cancelled);
            }
        }
        Ok(Outcome::Completed)
    }

    /// Wait with the line low. Returns false without waiting if
    /// cancellation was already requested.
    async fn pause(&mut self, gap: Duration, cancel: &CancelSignal) -> bool {
        if cancel.is_cancelled() {
            return false;
        }
        self.transmitter.delay.delay(gap).await;
        true
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::hal::{MockDelay, MockEvent, MockLine, MockTimeline};

    const UNIT: Duration = Duration::from_millis(10);

    fn u(n: u32) -> Duration {
        UNIT * n
    }

    fn setup() -> (MockTimeline, Transmitter<MockLine, MockDelay>) {
        let timeline = MockTimeline::new();
        let tx = Transmitter::new(timeline.line(), timeline.delay(), Timing::derive(UNIT));
        timeline.clear();
        (timeline, tx)
    }

    // =========================================================================
    // Sequencing Tests
    // =========================================================================

    #[tokio::test]
    async fn single_character_exact_events() {
        let (timeline, mut tx) = setup();

        let outcome = tx.transmit("a", &CancelSignal::new()).await.unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            timeline.events(),
            [
                MockEvent::High,
                MockEvent::Wait(u(1)),
                MockEvent::Low,
                MockEvent::Wait(u(1)),
                MockEvent::High,
                MockEvent::Wait(u(3)),
                MockEvent::Low,
                MockEvent::Wait(u(3)),
                MockEvent::Low,
            ]
        );
    }

    #[tokio::test]
    async fn sos_groups_and_gaps() {
        let (timeline, mut tx) = setup();

        tx.transmit("sos", &CancelSignal::new()).await.unwrap();

        let dot = u(1);
        let dash = u(3);
        assert_eq!(
            timeline.pulses(),
            [dot, dot, dot, dash, dash, dash, dot, dot, dot]
        );
        // intra, intra, char | intra, intra, char | intra, intra, trailing char
        let gaps = timeline.gaps();
        assert_eq!(
            gaps,
            [u(1), u(1), u(3), u(1), u(1), u(3), u(1), u(1), u(3)]
        );
        assert!(!gaps.contains(&u(7)));
    }

    #[tokio::test]
    async fn word_gap_replaces_character_gap() {
        let (timeline, mut tx) = setup();

        tx.transmit("e e", &CancelSignal::new()).await.unwrap();

        assert_eq!(timeline.pulses(), [u(1), u(1)]);
        assert_eq!(timeline.gaps(), [u(7), u(3)]);
    }

    #[tokio::test]
    async fn whitespace_run_is_one_word_gap() {
        let (timeline, mut tx) = setup();

        tx.transmit("e \t\n e", &CancelSignal::new()).await.unwrap();

        assert_eq!(timeline.gaps(), [u(7), u(3)]);
    }

    #[tokio::test]
    async fn uppercase_is_folded() {
        let (lower, mut tx_lower) = setup();
        let (upper, mut tx_upper) = setup();

        tx_lower.transmit("hello", &CancelSignal::new()).await.unwrap();
        tx_upper.transmit("HeLLo", &CancelSignal::new()).await.unwrap();

        assert_eq!(lower.events(), upper.events());
    }

    #[tokio::test]
    async fn intra_gap_follows_timing() {
        let timeline = MockTimeline::new();
        let timing = Timing::derive(UNIT).with_intra_character_units(2);
        let mut tx = Transmitter::new(timeline.line(), timeline.delay(), timing);

        tx.transmit("i", &CancelSignal::new()).await.unwrap();

        assert_eq!(timeline.gaps(), [u(2), u(3)]);
    }

    // =========================================================================
    // Session State Tests
    // =========================================================================

    #[tokio::test]
    async fn session_moves_to_completed() {
        let (_timeline, mut tx) = setup();
        let mut session = tx.session("t");
        assert_eq!(session.state(), SessionState::Idle);

        session.run(&CancelSignal::new()).await.unwrap();

        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.line_state(), LineState::Low);
    }

    #[tokio::test]
    async fn session_cannot_rerun() {
        let (timeline, mut tx) = setup();
        let mut session = tx.session("t");
        session.run(&CancelSignal::new()).await.unwrap();
        let pulses = timeline.high_count();

        let again = session.run(&CancelSignal::new()).await;

        assert_eq!(
            again,
            Err(TransmitError::SessionClosed(SessionState::Completed))
        );
        assert_eq!(timeline.high_count(), pulses);
    }

    #[tokio::test]
    async fn failed_session_state() {
        let (timeline, mut tx) = setup();
        let mut session = tx.session("a?");

        let result = session.run(&CancelSignal::new()).await;

        assert_eq!(result, Err(TransmitError::UnsupportedCharacter('?')));
        assert_eq!(session.state(), SessionState::Failed);
        assert_eq!(timeline.line_state(), LineState::Low);
    }

    #[tokio::test]
    async fn cancelled_before_start_emits_nothing() {
        let (timeline, mut tx) = setup();
        let cancel = CancelSignal::new();
        cancel.cancel();

        let mut session = tx.session("abc");
        let outcome = session.run(&cancel).await.unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(session.state(), SessionState::Cancelled);
        assert_eq!(timeline.high_count(), 0);
        assert_eq!(timeline.events(), [MockEvent::Low]);
    }

    #[test]
    fn terminal_states() {
        assert!(!SessionState::Idle.is_terminal());
        assert!(!SessionState::Transmitting.is_terminal());
        assert!(SessionState::Completed.is_terminal());
        assert!(SessionState::Cancelled.is_terminal());
        assert!(SessionState::Failed.is_terminal());
    }

    #[test]
    fn new_drives_line_low() {
        let timeline = MockTimeline::new();
        let _tx = Transmitter::new(timeline.line(), timeline.delay(), Timing::default());
        assert_eq!(timeline.events(), [MockEvent::Low]);
    }
}
