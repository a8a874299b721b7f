//! LZ78 encoder (compression).

use crate::config::Lz78Config;
use crate::dictionary::EncoderDictionary;
use crate::token::{EMPTY_PHRASE, Token};

/// LZ78 encoder for compression.
///
/// Holds only its configuration; every call to [`Lz78Encoder::encode`]
/// starts from a fresh dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz78Encoder {
    config: Lz78Config,
}

impl Lz78Encoder {
    /// Create a new LZ78 encoder with the given configuration.
    pub fn new(config: Lz78Config) -> Self {
        Self { config }
    }

    /// The encoder configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }

    /// Encode data into LZ78 tokens.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the empty phrase
    /// 2. Extend the current phrase byte by byte while it stays in the dictionary
    /// 3. On the first byte that makes it unknown, emit (current phrase id, byte),
    ///    register the extended phrase and restart from the empty phrase
    /// 4. If input ends inside a known phrase, emit that phrase's own
    ///    (prefix id, last byte) token so no trailing byte is lost
    pub fn encode(&self, input: &[u8]) -> Vec<Token> {
        let mut dict = EncoderDictionary::new(self.config);
        let tokens = encode_into(input, &mut dict);

        log::debug!(
            "lz78 encode: {} bytes -> {} tokens ({} phrases)",
            input.len(),
            tokens.len(),
            dict.phrase_count()
        );

        tokens
    }
}

/// Run the encoder against a caller-supplied dictionary.
pub(crate) fn encode_into(input: &[u8], dict: &mut EncoderDictionary) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = EMPTY_PHRASE;

    for &byte in input {
        if let Some(id) = dict.lookup(current, byte) {
            current = id;
            continue;
        }

        tokens.push(Token::new(current, byte));
        dict.register(current, byte);
        current = EMPTY_PHRASE;
    }

    // Input ended inside a known phrase. Re-emitting its defining token
    // spells out exactly those bytes.
    if let Some(token) = dict.token_for(current) {
        tokens.push(token);
        dict.register(token.prefix_id, token.symbol);
    }

    tokens
}
