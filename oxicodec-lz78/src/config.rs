//! LZ78 configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LZ78 configuration parameters.
///
/// Encoder and decoder must use the same configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lz78Config {
    /// Maximum number of non-empty phrases the dictionary may hold.
    ///
    /// `None` lets the dictionary grow for the whole input. Once a bound is
    /// reached the dictionary is frozen: tokens are still emitted, but no
    /// new phrases are registered on either side.
    pub max_phrases: Option<u64>,
}

impl Lz78Config {
    /// Dictionary grows without limit.
    pub const UNBOUNDED: Self = Self { max_phrases: None };

    /// Create a configuration whose dictionary holds at most `max_phrases` phrases.
    pub fn new(max_phrases: u64) -> Self {
        Self {
            max_phrases: Some(max_phrases),
        }
    }

    /// Whether a dictionary holding `phrases` phrases may register another.
    pub fn admits(&self, phrases: u64) -> bool {
        self.max_phrases.is_none_or(|max| phrases < max)
    }
}
