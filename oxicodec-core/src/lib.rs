//! # OxiCodec Core
//!
//! Core components shared by the OxiCodec codecs.
//!
//! - [`bitstream`]: packing bit sequences into bytes with an explicit bit count
//! - [`traits`]: the [`Codec`] call contract and the text-mode boundary
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L2: Codec                                               │
//! │     Huffman (entropy), LZ78 (adaptive dictionary)       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     BitWriter/BitReader, Codec trait, errors            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_core::bitstream::{pack_bits, unpack_bits};
//!
//! let packed = pack_bits(&[true, false, true, true]);
//! assert_eq!(packed.bit_count, 4);
//!
//! let bits = unpack_bits(&packed.bytes, packed.bit_count).unwrap();
//! assert_eq!(bits, vec![true, false, true, true]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, PackedBits, pack_bits, unpack_bits};
pub use error::{OxiCodecError, Result};
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter, PackedBits};
    pub use crate::error::{OxiCodecError, Result};
    pub use crate::traits::Codec;
}
