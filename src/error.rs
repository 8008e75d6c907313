//! Error types returned by the transmission engine.

use core::fmt;

use crate::engine::SessionState;

/// Why a transmission failed.
///
/// Cancellation is not an error; it is reported as
/// [`Outcome::Cancelled`](crate::Outcome::Cancelled).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransmitError {
    /// The message contains a character with no Morse encoding
    /// (anything but letters, digits and whitespace).
    ///
    /// Carries the character as it appeared in the message.
    UnsupportedCharacter(char),

    /// The session already reached a terminal state. Create a new
    /// session to transmit again.
    SessionClosed(SessionState),
}

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCharacter(c) => {
                write!(f, "unsupported character {:?} in message", c)
            }
            Self::SessionClosed(state) => {
                write!(f, "session already {}", state.as_str())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransmitError {}
