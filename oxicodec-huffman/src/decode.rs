//! Huffman decompression.

use crate::codes::CodeTable;
use oxicodec_core::bitstream::BitReader;
use oxicodec_core::error::{OxiCodecError, Result};

/// Root of every decode trie.
const ROOT: usize = 0;

/// One node of the decode trie built from a code table.
#[derive(Debug, Clone, Copy, Default)]
struct TrieNode {
    /// Child reached by bit `0` / bit `1`.
    children: [Option<u32>; 2],
    /// Set on nodes where a code ends.
    symbol: Option<u8>,
}

/// Binary trie mapping bit paths to symbols.
///
/// Walking it bit by bit is equivalent to accumulating bits until they
/// equal some code, for any prefix-free table.
#[derive(Debug)]
struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    /// Build from a table that has already passed [`CodeTable::validate`].
    fn new(table: &CodeTable) -> Self {
        let mut nodes = vec![TrieNode::default()];

        for (symbol, code) in table.iter() {
            let mut current = ROOT;
            for &bit in code.bits() {
                let existing = nodes[current].children[bit as usize];
                current = match existing {
                    Some(child) => child as usize,
                    None => {
                        let child = nodes.len();
                        nodes.push(TrieNode::default());
                        nodes[current].children[bit as usize] = Some(child as u32);
                        child
                    }
                };
            }
            nodes[current].symbol = Some(symbol);
        }

        Self { nodes }
    }
}

/// Decompress a Huffman payload.
///
/// Exactly `bit_count` bits are read; padding beyond that is ignored. The
/// table must be the one produced for this payload.
///
/// # Errors
///
/// - [`OxiCodecError::InvalidCodeTable`] if a code is empty or the table is not prefix-free
/// - [`OxiCodecError::BitCountOutOfRange`] if `payload` is shorter than `bit_count` bits
/// - [`OxiCodecError::InvalidHuffmanCode`] if the bits leave every code path
/// - [`OxiCodecError::TruncatedCode`] if `bit_count` ends in the middle of a code
pub fn decompress(payload: &[u8], bit_count: u64, code_table: &CodeTable) -> Result<Vec<u8>> {
    code_table.validate()?;
    let trie = DecodeTrie::new(code_table);
    let mut reader = BitReader::new(payload, bit_count)?;

    // Every code is at least one bit long.
    let mut output = Vec::with_capacity(bit_count.min(payload.len() as u64 * 8) as usize);
    let mut current = ROOT;

    while let Some(bit) = reader.read_bit() {
        current = match trie.nodes[current].children[bit as usize] {
            Some(child) => child as usize,
            None => return Err(OxiCodecError::invalid_huffman(reader.position() - 1)),
        };

        if let Some(symbol) = trie.nodes[current].symbol {
            output.push(symbol);
            current = ROOT;
        }
    }

    if current != ROOT {
        return Err(OxiCodecError::truncated_code(bit_count));
    }

    log::debug!(
        "huffman decompress: {} bits -> {} bytes",
        bit_count,
        output.len()
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Code;

    fn table(entries: &[(u8, &str)]) -> CodeTable {
        entries
            .iter()
            .map(|&(symbol, code)| (symbol, code.parse::<Code>().unwrap()))
            .collect()
    }

    #[test]
    fn test_decode_simple() {
        let codes = table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]);
        // a b c a -> 0 10 11 0
        let output = decompress(&[0b0101_1000], 6, &codes).unwrap();
        assert_eq!(output, b"abca");
    }

    #[test]
    fn test_decode_stops_at_bit_count() {
        let codes = table(&[(b'x', "0")]);
        // Only 3 of the 8 zero bits are real.
        let output = decompress(&[0x00], 3, &codes).unwrap();
        assert_eq!(output, b"xxx");
    }

    #[test]
    fn test_decode_empty() {
        assert!(decompress(&[], 0, &CodeTable::new()).unwrap().is_empty());
    }

    #[test]
    fn test_decode_truncated() {
        let codes = table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]);
        // a then half of b
        let err = decompress(&[0b0100_0000], 2, &codes).unwrap_err();
        assert!(matches!(err, OxiCodecError::TruncatedCode { bit_count: 2 }));
    }

    #[test]
    fn test_decode_invalid_path() {
        // Incomplete code: "1" leads nowhere.
        let codes = table(&[(b'a', "0")]);
        let err = decompress(&[0b0100_0000], 2, &codes).unwrap_err();
        assert!(matches!(
            err,
            OxiCodecError::InvalidHuffmanCode { bit_position: 1 }
        ));
    }

    #[test]
    fn test_decode_bits_without_table() {
        let err = decompress(&[0xFF], 8, &CodeTable::new()).unwrap_err();
        assert!(matches!(
            err,
            OxiCodecError::InvalidHuffmanCode { bit_position: 0 }
        ));
    }

    #[test]
    fn test_decode_rejects_bad_table() {
        let codes = table(&[(b'a', "0"), (b'b', "01")]);
        let err = decompress(&[0x00], 2, &codes).unwrap_err();
        assert!(matches!(err, OxiCodecError::InvalidCodeTable { .. }));
    }

    #[test]
    fn test_decode_bit_count_too_large() {
        let codes = table(&[(b'a', "0")]);
        let err = decompress(&[0x00], 9, &codes).unwrap_err();
        assert!(matches!(err, OxiCodecError::BitCountOutOfRange { .. }));
    }
}
