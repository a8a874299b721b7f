//! LZ78 phrase dictionaries.
//!
//! Both sides start from the empty phrase under id 0 and assign ids in
//! strictly increasing order, one per token. The encoder indexes phrases as
//! a trie keyed on `(prefix id, next byte)`; the decoder stores each phrase
//! as a span of its own output, since every phrase it learns is exactly the
//! bytes it just wrote.

use crate::config::Lz78Config;
use crate::token::{EMPTY_PHRASE, Token};
use oxicodec_core::error::{OxiCodecError, Result};
use std::collections::HashMap;
use std::ops::Range;

/// Encoder-side dictionary.
#[derive(Debug)]
pub struct EncoderDictionary {
    /// Trie edges: (prefix id, byte) -> phrase id.
    children: HashMap<(u64, u8), u64>,
    /// `entries[id]` is the (prefix id, byte) pair that formed phrase `id`.
    entries: Vec<(u64, u8)>,
    /// Configuration.
    config: Lz78Config,
}

impl EncoderDictionary {
    /// Create a dictionary holding only the empty phrase.
    pub fn new(config: Lz78Config) -> Self {
        Self {
            children: HashMap::new(),
            entries: vec![(EMPTY_PHRASE, 0)],
            config,
        }
    }

    /// Id of the phrase `prefix_id` extended by `symbol`, if known.
    pub fn lookup(&self, prefix_id: u64, symbol: u8) -> Option<u64> {
        self.children.get(&(prefix_id, symbol)).copied()
    }

    /// Register the phrase `prefix_id + symbol` under the next id.
    ///
    /// Returns the assigned id, or `None` when the dictionary is frozen. A
    /// phrase that is already known gets a fresh id all the same, so the id
    /// sequence stays in step with the decoder, which registers every token.
    pub fn register(&mut self, prefix_id: u64, symbol: u8) -> Option<u64> {
        if !self.config.admits(self.phrase_count()) {
            return None;
        }

        let id = self.next_id();
        self.entries.push((prefix_id, symbol));
        self.children.entry((prefix_id, symbol)).or_insert(id);

        if !self.config.admits(self.phrase_count()) {
            log::trace!("LZ78 encoder dictionary frozen at {} phrases", id);
        }

        Some(id)
    }

    /// The token that spells phrase `id`: its prefix and final byte.
    ///
    /// `None` for the empty phrase and for ids not yet assigned.
    pub fn token_for(&self, id: u64) -> Option<Token> {
        if id == EMPTY_PHRASE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        self.entries
            .get(index)
            .map(|&(prefix_id, symbol)| Token::new(prefix_id, symbol))
    }

    /// Reconstruct the bytes of phrase `id`.
    pub fn phrase(&self, id: u64) -> Option<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut current = id;
        while current != EMPTY_PHRASE {
            let token = self.token_for(current)?;
            bytes.push(token.symbol);
            current = token.prefix_id;
        }
        bytes.reverse();
        Some(bytes)
    }

    /// The next id that will be assigned.
    pub fn next_id(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Number of non-empty phrases.
    pub fn phrase_count(&self) -> u64 {
        self.next_id() - 1
    }
}

/// Decoder-side dictionary, which also owns the decoded output.
#[derive(Debug)]
pub struct DecoderDictionary {
    /// Decoded bytes so far.
    output: Vec<u8>,
    /// `spans[id]` is where phrase `id` sits in `output`.
    spans: Vec<Range<usize>>,
    /// Configuration.
    config: Lz78Config,
}

impl DecoderDictionary {
    /// Create a dictionary holding only the empty phrase.
    pub fn new(config: Lz78Config) -> Self {
        Self {
            output: Vec::new(),
            spans: vec![0..0],
            config,
        }
    }

    /// Create a dictionary with room for `capacity` output bytes.
    pub fn with_capacity(config: Lz78Config, capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            ..Self::new(config)
        }
    }

    /// Expand one token, append it to the output and register it as a phrase.
    ///
    /// `index` is the token's position in the stream, for error reporting.
    pub fn apply(&mut self, index: usize, token: Token) -> Result<()> {
        let span = usize::try_from(token.prefix_id)
            .ok()
            .and_then(|id| self.spans.get(id))
            .cloned()
            .ok_or_else(|| OxiCodecError::unknown_phrase(index, token.prefix_id, self.next_id()))?;

        let start = self.output.len();
        self.output.extend_from_within(span);
        self.output.push(token.symbol);

        if self.config.admits(self.phrase_count()) {
            self.spans.push(start..self.output.len());
            if !self.config.admits(self.phrase_count()) {
                log::trace!(
                    "LZ78 decoder dictionary frozen at {} phrases",
                    self.phrase_count()
                );
            }
        }

        Ok(())
    }

    /// The bytes of phrase `id`.
    pub fn phrase(&self, id: u64) -> Option<&[u8]> {
        let index = usize::try_from(id).ok()?;
        self.spans
            .get(index)
            .map(|span| &self.output[span.clone()])
    }

    /// The next id that will be assigned.
    pub fn next_id(&self) -> u64 {
        self.spans.len() as u64
    }

    /// Number of non-empty phrases.
    pub fn phrase_count(&self) -> u64 {
        self.next_id() - 1
    }

    /// Decoded bytes so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Consume the dictionary and return the decoded bytes.
    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_dictionary_init() {
        let dict = EncoderDictionary::new(Lz78Config::UNBOUNDED);
        assert_eq!(dict.next_id(), 1);
        assert_eq!(dict.phrase_count(), 0);
        assert_eq!(dict.phrase(EMPTY_PHRASE), Some(Vec::new()));
        assert_eq!(dict.token_for(EMPTY_PHRASE), None);
        assert_eq!(dict.lookup(EMPTY_PHRASE, b'a'), None);
    }

    #[test]
    fn test_encoder_register_and_lookup() {
        let mut dict = EncoderDictionary::new(Lz78Config::UNBOUNDED);
        assert_eq!(dict.register(EMPTY_PHRASE, b'a'), Some(1));
        assert_eq!(dict.register(1, b'b'), Some(2));

        assert_eq!(dict.lookup(EMPTY_PHRASE, b'a'), Some(1));
        assert_eq!(dict.lookup(1, b'b'), Some(2));
        assert_eq!(dict.phrase(2), Some(b"ab".to_vec()));
        assert_eq!(dict.token_for(2), Some(Token::new(1, b'b')));
        assert_eq!(dict.phrase(3), None);
    }

    #[test]
    fn test_encoder_duplicate_keeps_first_id() {
        let mut dict = EncoderDictionary::new(Lz78Config::UNBOUNDED);
        dict.register(EMPTY_PHRASE, b'a');
        assert_eq!(dict.register(EMPTY_PHRASE, b'a'), Some(2));
        assert_eq!(dict.lookup(EMPTY_PHRASE, b'a'), Some(1));
        assert_eq!(dict.phrase(2), Some(b"a".to_vec()));
    }

    #[test]
    fn test_encoder_frozen() {
        let mut dict = EncoderDictionary::new(Lz78Config::new(1));
        assert_eq!(dict.register(EMPTY_PHRASE, b'a'), Some(1));
        assert_eq!(dict.register(EMPTY_PHRASE, b'b'), None);
        assert_eq!(dict.lookup(EMPTY_PHRASE, b'b'), None);
        assert_eq!(dict.next_id(), 2);
    }

    #[test]
    fn test_decoder_apply() {
        let mut dict = DecoderDictionary::new(Lz78Config::UNBOUNDED);
        dict.apply(0, Token::new(0, b'a')).unwrap();
        dict.apply(1, Token::new(1, b'b')).unwrap();
        dict.apply(2, Token::new(2, b'c')).unwrap();

        assert_eq!(dict.output(), b"aababc");
        assert_eq!(dict.phrase(3), Some(&b"abc"[..]));
        assert_eq!(dict.next_id(), 4);
    }

    #[test]
    fn test_decoder_unknown_phrase() {
        let mut dict = DecoderDictionary::new(Lz78Config::UNBOUNDED);
        dict.apply(0, Token::new(0, b'a')).unwrap();

        let err = dict.apply(1, Token::new(2, b'a')).unwrap_err();
        assert!(matches!(
            err,
            OxiCodecError::UnknownPhrase {
                index: 1,
                prefix_id: 2,
                next_id: 2
            }
        ));
    }

    #[test]
    fn test_decoder_frozen() {
        let mut dict = DecoderDictionary::new(Lz78Config::new(1));
        dict.apply(0, Token::new(0, b'a')).unwrap();
        dict.apply(1, Token::new(1, b'b')).unwrap();
        assert_eq!(dict.next_id(), 2);
        assert!(dict.apply(2, Token::new(2, b'c')).is_err());
        assert_eq!(dict.into_output(), b"aab");
    }
}
