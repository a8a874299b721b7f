//! LZ78 decoder (decompression).

use crate::config::Lz78Config;
use crate::dictionary::DecoderDictionary;
use crate::token::Token;
use oxicodec_core::error::Result;

/// LZ78 decoder for decompression.
///
/// Rebuilds the dictionary in lockstep with the encoder. Holds only its
/// configuration, which must match the encoder's.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz78Decoder {
    config: Lz78Config,
}

impl Lz78Decoder {
    /// Create a new LZ78 decoder with the given configuration.
    pub fn new(config: Lz78Config) -> Self {
        Self { config }
    }

    /// The decoder configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }

    /// Decode LZ78 tokens back into bytes.
    ///
    /// Fails with [`OxiCodecError::UnknownPhrase`](oxicodec_core::OxiCodecError::UnknownPhrase)
    /// if a token references an id the dictionary has not assigned yet.
    pub fn decode(&self, tokens: &[Token]) -> Result<Vec<u8>> {
        let mut dict = DecoderDictionary::with_capacity(self.config, tokens.len());
        decode_into(tokens, &mut dict)?;

        log::debug!(
            "lz78 decode: {} tokens -> {} bytes ({} phrases)",
            tokens.len(),
            dict.output().len(),
            dict.phrase_count()
        );

        Ok(dict.into_output())
    }
}

/// Run the decoder against a caller-supplied dictionary.
pub(crate) fn decode_into(tokens: &[Token], dict: &mut DecoderDictionary) -> Result<()> {
    for (index, &token) in tokens.iter().enumerate() {
        dict.apply(index, token)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxicodec_core::OxiCodecError;

    #[test]
    fn test_decode_empty() {
        assert!(Lz78Decoder::default().decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_literals() {
        let tokens = [Token::new(0, b'h'), Token::new(0, b'i')];
        assert_eq!(Lz78Decoder::default().decode(&tokens).unwrap(), b"hi");
    }

    #[test]
    fn test_decode_growing_phrases() {
        let tokens = [Token::new(0, b'a'), Token::new(1, b'a'), Token::new(0, b'a')];
        assert_eq!(Lz78Decoder::default().decode(&tokens).unwrap(), b"aaaa");
    }

    #[test]
    fn test_decode_forward_reference() {
        // Token 1 refers to itself before id 2 exists.
        let tokens = [Token::new(0, b'a'), Token::new(2, b'b')];
        let err = Lz78Decoder::default().decode(&tokens).unwrap_err();
        assert!(matches!(
            err,
            OxiCodecError::UnknownPhrase {
                index: 1,
                prefix_id: 2,
                next_id: 2
            }
        ));
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_decode_huge_prefix_id() {
        let tokens = [Token::new(u64::MAX, 0)];
        assert!(Lz78Decoder::default().decode(&tokens).is_err());
    }

    #[test]
    fn test_decode_respects_bound() {
        // With a 1-phrase dictionary, id 2 never exists.
        let tokens = [Token::new(0, b'a'), Token::new(1, b'b'), Token::new(2, b'c')];
        let decoder = Lz78Decoder::new(Lz78Config::new(1));
        assert!(decoder.decode(&tokens).is_err());
        assert!(Lz78Decoder::default().decode(&tokens).is_ok());
    }
}
