//! The LZ78 output unit.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Id of the empty phrase, present in every dictionary.
pub const EMPTY_PHRASE: u64 = 0;

/// A known phrase followed by one new byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Id of a phrase already in the dictionary.
    pub prefix_id: u64,
    /// Byte appended to that phrase.
    pub symbol: u8,
}

impl Token {
    /// Create a token.
    pub const fn new(prefix_id: u64, symbol: u8) -> Self {
        Self { prefix_id, symbol }
    }

    /// True if the token carries a bare byte (its prefix is the empty phrase).
    pub fn is_literal(&self) -> bool {
        self.prefix_id == EMPTY_PHRASE
    }
}

impl From<(u64, u8)> for Token {
    fn from((prefix_id, symbol): (u64, u8)) -> Self {
        Self::new(prefix_id, symbol)
    }
}

impl From<Token> for (u64, u8) {
    fn from(token: Token) -> Self {
        (token.prefix_id, token.symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:#04x})", self.prefix_id, self.symbol)
    }
}
