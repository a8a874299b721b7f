//! The call contract shared by every codec.

use crate::error::Result;

/// A whole-buffer lossless codec.
///
/// `compress` turns input bytes into an artifact holding everything the
/// decoder needs; `decompress` reverses it. Both take `&self`: implementors
/// keep no per-call state, so one codec value can serve unrelated messages
/// from several threads at once.
pub trait Codec {
    /// Everything produced by compression and required by decompression.
    type Artifact;

    /// Compress `data` into an artifact.
    fn compress(&self, data: &[u8]) -> Result<Self::Artifact>;

    /// Reconstruct the original bytes from an artifact.
    fn decompress(&self, artifact: &Self::Artifact) -> Result<Vec<u8>>;

    /// Compress UTF-8 text.
    fn compress_str(&self, text: &str) -> Result<Self::Artifact> {
        self.compress(text.as_bytes())
    }

    /// Decompress an artifact that is expected to hold UTF-8 text.
    ///
    /// Fails with [`OxiCodecError::Encoding`](crate::OxiCodecError::Encoding)
    /// when the decoded bytes are not valid UTF-8.
    fn decompress_to_string(&self, artifact: &Self::Artifact) -> Result<String> {
        Ok(String::from_utf8(self.decompress(artifact)?)?)
    }
}
