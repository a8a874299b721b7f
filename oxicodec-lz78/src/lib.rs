//! # OxiCodec-LZ78: Pure Rust LZ78 Compression
//!
//! LZ78 learns repeated byte phrases while it reads its input. Every emitted
//! [`Token`] names a phrase already in the dictionary plus one new byte, and
//! that extended phrase becomes the next dictionary entry. The decoder grows
//! an identical dictionary from the tokens alone, so nothing but the token
//! sequence needs to be stored.
//!
//! ## Dictionary
//!
//! - Id 0 is the empty phrase
//! - Ids are assigned in strictly increasing order, one per token
//! - The dictionary lives for a single call and is never shared
//! - [`Lz78Config::max_phrases`] optionally freezes it at a fixed size
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_lz78::{Token, compress, decompress};
//!
//! let tokens = compress(b"aaaa");
//! assert_eq!(
//!     tokens,
//!     vec![Token::new(0, b'a'), Token::new(1, b'a'), Token::new(0, b'a')]
//! );
//! assert_eq!(decompress(&tokens).unwrap(), b"aaaa");
//! ```
//!
//! ## Trailing phrases
//!
//! When the input ends part-way through a phrase that is already known,
//! the encoder re-emits that phrase's own token. Every input byte is
//! therefore represented, including a trailing run that repeats a
//! dictionary entry verbatim.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod token;

pub use config::Lz78Config;
pub use decoder::Lz78Decoder;
pub use dictionary::{DecoderDictionary, EncoderDictionary};
pub use encoder::Lz78Encoder;
pub use token::{EMPTY_PHRASE, Token};

use oxicodec_core::{Codec, Result};

/// Compress data with an unbounded dictionary.
///
/// # Example
///
/// ```rust
/// use oxicodec_lz78::compress;
///
/// let tokens = compress(b"abcabc");
/// assert!(tokens.len() < 6);
/// ```
pub fn compress(data: &[u8]) -> Vec<Token> {
    compress_with(data, Lz78Config::UNBOUNDED)
}

/// Decompress tokens produced with an unbounded dictionary.
pub fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
    decompress_with(tokens, Lz78Config::UNBOUNDED)
}

/// Compress data with the given configuration.
pub fn compress_with(data: &[u8], config: Lz78Config) -> Vec<Token> {
    Lz78Encoder::new(config).encode(data)
}

/// Decompress tokens with the configuration they were produced with.
///
/// # Example
///
/// ```rust
/// use oxicodec_lz78::{Lz78Config, compress_with, decompress_with};
///
/// let config = Lz78Config::new(16);
/// let tokens = compress_with(b"to be or not to be", config);
/// assert_eq!(decompress_with(&tokens, config).unwrap(), b"to be or not to be");
/// ```
pub fn decompress_with(tokens: &[Token], config: Lz78Config) -> Result<Vec<u8>> {
    Lz78Decoder::new(config).decode(tokens)
}

/// Compress UTF-8 text with an unbounded dictionary.
pub fn compress_str(text: &str) -> Vec<Token> {
    compress(text.as_bytes())
}

/// Decompress tokens holding UTF-8 text.
///
/// Fails with [`OxiCodecError::Encoding`](oxicodec_core::OxiCodecError::Encoding)
/// when the decoded bytes are not valid UTF-8.
pub fn decompress_to_string(tokens: &[Token]) -> Result<String> {
    Ok(String::from_utf8(decompress(tokens)?)?)
}

/// LZ78 codec for the uniform [`Codec`] contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz78 {
    config: Lz78Config,
}

impl Lz78 {
    /// Create a codec with the given configuration.
    pub fn new(config: Lz78Config) -> Self {
        Self { config }
    }

    /// The codec configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }
}

impl Codec for Lz78 {
    type Artifact = Vec<Token>;

    fn compress(&self, data: &[u8]) -> Result<Vec<Token>> {
        Ok(compress_with(data, self.config))
    }

    fn decompress(&self, tokens: &Vec<Token>) -> Result<Vec<u8>> {
        decompress_with(tokens, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let tokens = compress(original);
        assert!(tokens.len() < original.len());
        assert_eq!(decompress(&tokens).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        let tokens = compress(b"");
        assert!(tokens.is_empty());
        assert!(decompress(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_codec_trait() {
        let codec = Lz78::new(Lz78Config::new(8));
        let tokens = codec.compress(b"abcabcabcabc").unwrap();
        assert_eq!(codec.decompress(&tokens).unwrap(), b"abcabcabcabc");
        assert_eq!(codec.config().max_phrases, Some(8));
    }

    #[test]
    fn test_text_mode() {
        let tokens = compress_str("ünïcödé ünïcödé");
        assert_eq!(decompress_to_string(&tokens).unwrap(), "ünïcödé ünïcödé");
    }

    #[test]
    fn test_text_mode_rejects_invalid_utf8() {
        let tokens = compress(&[0xF0, 0x9F]);
        assert!(matches!(
            decompress_to_string(&tokens),
            Err(oxicodec_core::OxiCodecError::Encoding(_))
        ));
    }
}
