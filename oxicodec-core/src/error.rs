//! Error types for OxiCodec operations.
//!
//! A single error type covers both codecs. Decode failures (corrupt payload,
//! mismatched code table, unknown phrase id) and the text-mode UTF-8 failure
//! are kept as distinct variants so callers can tell them apart.

use std::string::FromUtf8Error;
use thiserror::Error;

/// The main error type for OxiCodec operations.
#[derive(Debug, Error)]
pub enum OxiCodecError {
    /// A bit path in the payload does not lead to any code in the table.
    #[error("Invalid Huffman code at bit position {bit_position}")]
    InvalidHuffmanCode {
        /// Bit position where the path left the code tree.
        bit_position: u64,
    },

    /// The declared bit count ended in the middle of a code.
    #[error("Truncated Huffman code: stream ended mid-code at bit {bit_count}")]
    TruncatedCode {
        /// Declared bit count of the payload.
        bit_count: u64,
    },

    /// The declared bit count exceeds the bits present in the payload.
    #[error("Bit count {bit_count} exceeds payload capacity of {available} bits")]
    BitCountOutOfRange {
        /// Declared bit count.
        bit_count: u64,
        /// Bits physically available in the payload.
        available: u64,
    },

    /// The supplied code table cannot be used for decoding.
    #[error("Invalid code table: {message}")]
    InvalidCodeTable {
        /// Description of the table defect.
        message: String,
    },

    /// An LZ78 token references a phrase id that has not been assigned yet.
    #[error("Unknown phrase id {prefix_id} in token {index} (next id is {next_id})")]
    UnknownPhrase {
        /// Index of the offending token in the stream.
        index: usize,
        /// The referenced phrase id.
        prefix_id: u64,
        /// The next id the dictionary would assign.
        next_id: u64,
    },

    /// Decoded bytes are not valid UTF-8 (text mode only).
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Result type alias for OxiCodec operations.
pub type Result<T> = std::result::Result<T, OxiCodecError>;

impl OxiCodecError {
    /// Create an invalid Huffman code error.
    pub fn invalid_huffman(bit_position: u64) -> Self {
        Self::InvalidHuffmanCode { bit_position }
    }

    /// Create a truncated code error.
    pub fn truncated_code(bit_count: u64) -> Self {
        Self::TruncatedCode { bit_count }
    }

    /// Create a bit count out of range error.
    pub fn bit_count_out_of_range(bit_count: u64, available: u64) -> Self {
        Self::BitCountOutOfRange {
            bit_count,
            available,
        }
    }

    /// Create an invalid code table error.
    pub fn invalid_code_table(message: impl Into<String>) -> Self {
        Self::InvalidCodeTable {
            message: message.into(),
        }
    }

    /// Create an unknown phrase error.
    pub fn unknown_phrase(index: usize, prefix_id: u64, next_id: u64) -> Self {
        Self::UnknownPhrase {
            index,
            prefix_id,
            next_id,
        }
    }

    /// Whether this error means a payload or token stream could not be decoded.
    ///
    /// Everything except the text-mode [`OxiCodecError::Encoding`] failure.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, Self::Encoding(_))
    }
}
