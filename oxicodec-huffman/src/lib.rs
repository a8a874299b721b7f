//! # OxiCodec-Huffman: Pure Rust Huffman Coding
//!
//! Static Huffman coding over byte symbols. Compression counts byte
//! frequencies, builds a prefix-code tree, derives a code table and packs
//! the codes of every input byte into a bit buffer.
//!
//! ## Pipeline
//!
//! ```text
//! bytes -> FrequencyTable -> HuffmanTree -> CodeTable -> bits -> payload
//! ```
//!
//! The artifact carries the payload, its exact bit count and the code table.
//! The tree itself is discarded once the table is derived.
//!
//! ## Determinism
//!
//! Equal frequencies are resolved by insertion order (leaves in ascending
//! symbol order, then merged nodes in creation order). The same input always
//! yields the same tree and the same code table.
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let artifact = compress(original);
//! assert!(artifact.code_table.is_prefix_free());
//!
//! let decompressed =
//!     decompress(&artifact.payload, artifact.bit_count, &artifact.code_table).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codes;
mod decode;
mod encode;
mod frequency;
mod tree;

pub use codes::{Code, CodeTable};
pub use decode::decompress;
pub use encode::{HuffmanArtifact, compress};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, Node, NodeId};

use oxicodec_core::{Codec, Result};

/// Huffman codec for the uniform [`Codec`] contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Huffman;

impl Codec for Huffman {
    type Artifact = HuffmanArtifact;

    fn compress(&self, data: &[u8]) -> Result<HuffmanArtifact> {
        Ok(compress(data))
    }

    fn decompress(&self, artifact: &HuffmanArtifact) -> Result<Vec<u8>> {
        decompress(&artifact.payload, artifact.bit_count, &artifact.code_table)
    }
}

/// Compress UTF-8 text.
pub fn compress_str(text: &str) -> HuffmanArtifact {
    compress(text.as_bytes())
}

/// Decompress an artifact holding UTF-8 text.
///
/// Fails with [`OxiCodecError::Encoding`](oxicodec_core::OxiCodecError::Encoding)
/// when the decoded bytes are not valid UTF-8.
pub fn decompress_to_string(artifact: &HuffmanArtifact) -> Result<String> {
    Huffman.decompress_to_string(artifact)
}
