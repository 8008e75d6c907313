//! Tokio-backed [`Delay`].

use std::future::Future;
use std::time::Duration;

use crate::traits::Delay;

/// Delay that sleeps on the tokio timer.
///
/// Tokio timers have millisecond resolution, which bounds the timing
/// error of every pulse and gap.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use gpio_morse::{hal::TokioDelay, traits::Delay};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut delay = TokioDelay::new();
/// delay.delay(Duration::from_millis(1)).await;
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

impl TokioDelay {
    /// Creates a new tokio delay.
    pub fn new() -> Self {
        Self
    }
}

impl Delay for TokioDelay {
    fn delay(&mut self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_requested_duration() {
        let start = tokio::time::Instant::now();
        TokioDelay::new().delay(Duration::from_millis(700)).await;
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_returns() {
        let start = tokio::time::Instant::now();
        TokioDelay::new().delay(Duration::ZERO).await;
        assert!(start.elapsed() < Duration::from_millis(1));
    }
}
