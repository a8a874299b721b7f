//! Prefix codes and the code table transmitted with a Huffman payload.

use oxicodec_core::error::{OxiCodecError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A variable-length bit string assigned to one symbol.
///
/// Displays and parses as a string of `'0'` and `'1'` characters, first
/// bit leftmost.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Create an empty code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a code from bits, first bit first.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// A copy of this code extended by one bit.
    pub fn extended(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    /// The bits of this code, first bit first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-length code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = OxiCodecError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(OxiCodecError::invalid_code_table(format!(
                    "invalid bit character {other:?} in code {s:?}"
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::from_bits)
    }
}

impl TryFrom<String> for Code {
    type Error = OxiCodecError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

/// Mapping from symbol to its prefix code.
///
/// The decoder cannot work without it, so it is part of the compressed
/// artifact. Iteration is in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `code` to `symbol`, returning the previous code if any.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    /// The code for `symbol`.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// True if no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        self.first_prefix_conflict().is_none()
    }

    /// Check that the table can drive a decoder: no empty code and prefix-free.
    pub fn validate(&self) -> Result<()> {
        if let Some((symbol, _)) = self.iter().find(|(_, code)| code.is_empty()) {
            return Err(OxiCodecError::invalid_code_table(format!(
                "symbol {symbol:#04x} has an empty code"
            )));
        }

        if let Some((a, b)) = self.first_prefix_conflict() {
            return Err(OxiCodecError::invalid_code_table(format!(
                "code for symbol {a:#04x} is a prefix of the code for symbol {b:#04x}"
            )));
        }

        Ok(())
    }

    /// After a lexicographic sort, any prefix relation shows up between neighbours.
    fn first_prefix_conflict(&self) -> Option<(u8, u8)> {
        let mut sorted: Vec<(&Code, u8)> = self.iter().map(|(s, c)| (c, s)).collect();
        sorted.sort();

        sorted
            .windows(2)
            .find(|pair| pair[0].0.is_prefix_of(pair[1].0))
            .map(|pair| (pair[0].1, pair[1].1))
    }
}

impl FromIterator<(u8, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (u8, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
