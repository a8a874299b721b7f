//! Huffman compression.

use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use oxicodec_core::bitstream::BitWriter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything Huffman decompression needs.
///
/// The payload alone is not decodable: the code table and the exact bit
/// count must travel with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HuffmanArtifact {
    /// Packed code bits, zero-padded to a whole byte.
    pub payload: Vec<u8>,
    /// Number of meaningful bits in `payload`.
    pub bit_count: u64,
    /// Symbol to code mapping used for the payload.
    pub code_table: CodeTable,
}

/// Compress `data` with a Huffman code built from its own byte frequencies.
///
/// Empty input gives an empty payload, a bit count of 0 and an empty table.
///
/// # Example
///
/// ```rust
/// use oxicodec_huffman::compress;
///
/// let artifact = compress(b"aaaa");
/// assert_eq!(artifact.code_table.get(b'a').unwrap().to_string(), "0");
/// assert_eq!(artifact.bit_count, 4);
/// ```
pub fn compress(data: &[u8]) -> HuffmanArtifact {
    let freqs = FrequencyTable::from_data(data);
    let code_table = HuffmanTree::from_frequencies(&freqs).code_table();

    // Per-symbol lookup so the hot loop avoids the map.
    let unused: &[bool] = &[];
    let mut lookup = [unused; 256];
    let mut total_bits = 0u64;
    for (symbol, code) in code_table.iter() {
        lookup[symbol as usize] = code.bits();
        total_bits += freqs.count(symbol) * code.len() as u64;
    }

    let mut writer = BitWriter::with_capacity(total_bits);
    for &byte in data {
        writer.write_bits(lookup[byte as usize]);
    }
    let packed = writer.finish();

    log::debug!(
        "huffman compress: {} bytes -> {} bytes ({} bits, {} symbols)",
        data.len(),
        packed.bytes.len(),
        packed.bit_count,
        code_table.len()
    );

    HuffmanArtifact {
        payload: packed.bytes,
        bit_count: packed.bit_count,
        code_table,
    }
}
