//! International Morse Code symbol table.
//!
//! The table covers the lowercase Latin letters `a`-`z` and the digits
//! `0`-`9`. Sequences are static and never built at runtime; lookup is a
//! plain `match`.
//!
//! # Example
//!
//! ```rust
//! use gpio_morse::symbols::{lookup, Symbol};
//!
//! assert_eq!(lookup('a'), Some(&[Symbol::Dot, Symbol::Dash][..]));
//! assert_eq!(lookup('!'), None);
//!
//! // Case folding is the caller's job
//! assert_eq!(lookup('A'), None);
//! ```

use alloc::string::String;

use crate::error::TransmitError;

/// One Morse element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Symbol {
    /// Short element, one time unit.
    Dot,
    /// Long element, three time units.
    Dash,
}

impl Symbol {
    /// Printable form used by [`render`].
    #[inline]
    pub const fn as_char(&self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Length of the element in time units.
    #[inline]
    pub const fn units(&self) -> u32 {
        match self {
            Symbol::Dot => crate::timing::DOT_UNITS,
            Symbol::Dash => crate::timing::DASH_UNITS,
        }
    }
}

use Symbol::{Dash as L, Dot as S};

/// Looks up the symbol sequence for a lowercase letter or digit.
///
/// Returns `None` for anything else, including uppercase letters,
/// whitespace and punctuation.
pub fn lookup(c: char) -> Option<&'static [Symbol]> {
    let seq: &'static [Symbol] = match c {
        'a' => &[S, L],
        'b' => &[L, S, S, S],
        'c' => &[L, S, L, S],
        'd' => &[L, S, S],
        'e' => &[S],
        'f' => &[S, S, L, S],
        'g' => &[L, L, S],
        'h' => &[S, S, S, S],
        'i' => &[S, S],
        'j' => &[S, L, L, L],
        'k' => &[L, S, L],
        'l' => &[S, L, S, S],
        'm' => &[L, L],
        'n' => &[L, S],
        'o' => &[L, L, L],
        'p' => &[S, L, L, S],
        'q' => &[L, L, S, L],
        'r' => &[S, L, S],
        's' => &[S, S, S],
        't' => &[L],
        'u' => &[S, S, L],
        'v' => &[S, S, S, L],
        'w' => &[S, L, L],
        'x' => &[L, S, S, L],
        'y' => &[L, S, L, L],
        'z' => &[L, L, S, S],
        '1' => &[S, L, L, L, L],
        '2' => &[S, S, L, L, L],
        '3' => &[S, S, S, L, L],
        '4' => &[S, S, S, S, L],
        '5' => &[S, S, S, S, S],
        '6' => &[L, S, S, S, S],
        '7' => &[L, L, S, S, S],
        '8' => &[L, L, L, S, S],
        '9' => &[L, L, L, L, S],
        '0' => &[L, L, L, L, L],
        _ => return None,
    };
    Some(seq)
}

/// Renders a message as printable Morse text.
///
/// Characters are separated by a single space and every whitespace run
/// becomes `" / "`. Uppercase letters are folded the same way the
/// transmission engine folds them, and an unmapped character fails with
/// [`TransmitError::UnsupportedCharacter`].
///
/// ```
/// use gpio_morse::symbols::render;
///
/// assert_eq!(render("SOS").unwrap(), "... --- ...");
/// assert_eq!(render("a b").unwrap(), ".- / -...");
/// assert!(render("a!b").is_err());
/// ```
pub fn render(message: &str) -> Result<String, TransmitError> {
    let mut out = String::new();
    let mut word_break = false;

    for c in message.chars() {
        if c.is_whitespace() {
            word_break = true;
            continue;
        }

        let symbols =
            lookup(c.to_ascii_lowercase()).ok_or(TransmitError::UnsupportedCharacter(c))?;
        if !out.is_empty() {
            out.push_str(if word_break { " / " } else { " " });
        }
        out.extend(symbols.iter().map(Symbol::as_char));
        word_break = false;
    }

    Ok(out)
}
