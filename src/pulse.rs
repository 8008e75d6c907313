//! Pulse driver: one key-down interval per symbol.
//!
//! The driver only produces the pulse itself. Spacing between pulses is
//! decided by the transmission engine, so pulse timing and gap timing can
//! be checked independently.

use crate::symbols::Symbol;
use crate::timing::Timing;
use crate::traits::{Delay, OutputLine};

/// Emit exactly one high-to-low pulse for `symbol`.
///
/// Drives the line high, waits the dot or dash duration from `timing`,
/// then drives it low. Holds no state between calls.
///
/// ```rust
/// use core::time::Duration;
/// use gpio_morse::{pulse, hal::{MockEvent, MockTimeline}, symbols::Symbol, Timing};
///
/// # tokio_test_block_on(async {
/// let timeline = MockTimeline::new();
/// let (mut line, mut delay) = (timeline.line(), timeline.delay());
/// let timing = Timing::derive(Duration::from_millis(10));
///
/// pulse::emit(Symbol::Dash, &timing, &mut line, &mut delay).await;
///
/// assert_eq!(
///     timeline.events(),
///     [MockEvent::High, MockEvent::Wait(Duration::from_millis(30)), MockEvent::Low]
/// );
/// # });
/// # fn tokio_test_block_on<F: core::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn emit<L, D>(symbol: Symbol, timing: &Timing, line: &mut L, delay: &mut D)
where
    L: OutputLine,
    D: Delay,
{
    line.set_high();
    delay.delay(timing.duration_of(symbol)).await;
    line.set_low();
}
