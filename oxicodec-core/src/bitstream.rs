//! Bit sequence packing.
//!
//! `BitWriter` packs an ordered run of bits into bytes and `BitReader`
//! replays exactly the bits that were written. Bits are packed MSB-first:
//! the first bit of the sequence lands in bit 7 of the first byte. The final
//! byte is zero-padded, so a packed buffer never describes its own length;
//! the true bit count always travels alongside it in [`PackedBits`].
//!
//! # Example
//!
//! ```
//! use oxicodec_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(&[true, false, true]);
//! let packed = writer.finish();
//! assert_eq!(packed.bytes, vec![0b1010_0000]);
//! assert_eq!(packed.bit_count, 3);
//!
//! let reader = BitReader::new(&packed.bytes, packed.bit_count).unwrap();
//! assert_eq!(reader.collect::<Vec<_>>(), vec![true, false, true]);
//! ```

use crate::error::{OxiCodecError, Result};

/// A packed bit buffer together with its true length in bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBits {
    /// Packed bytes, zero-padded at the end.
    pub bytes: Vec<u8>,
    /// Number of meaningful bits in `bytes`.
    pub bit_count: u64,
}

impl PackedBits {
    /// Number of padding bits in the final byte, always below 8.
    pub fn padding_bits(&self) -> u8 {
        ((8 - self.bit_count % 8) % 8) as u8
    }
}

/// MSB-first bit writer producing a zero-padded byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Partial byte (bits fill from the MSB side).
    buffer: u8,
    /// Number of bits in `buffer`.
    bits_in_buffer: u8,
    /// Total bits written.
    bit_count: u64,
}

impl BitWriter {
    /// Create an empty bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bit writer with room for `bits` bits.
    pub fn with_capacity(bits: u64) -> Self {
        Self {
            output: Vec::with_capacity(bits.div_ceil(8) as usize),
            ..Self::default()
        }
    }

    /// Append a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_in_buffer += 1;
        self.bit_count += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Append a run of bits in order.
    pub fn write_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Number of bits written so far.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Pad the last byte with zeros and return the packed buffer.
    pub fn finish(mut self) -> PackedBits {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.output.push(self.buffer << remaining);
        }

        PackedBits {
            bytes: self.output,
            bit_count: self.bit_count,
        }
    }
}

/// MSB-first bit reader that stops at the declared bit count.
///
/// Padding bits beyond `bit_count` are never yielded.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Packed input.
    data: &'a [u8],
    /// Number of meaningful bits in `data`.
    bit_count: u64,
    /// Bits consumed so far.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` that yields exactly `bit_count` bits.
    ///
    /// Fails if `data` holds fewer than `bit_count` bits.
    pub fn new(data: &'a [u8], bit_count: u64) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if bit_count > available {
            return Err(OxiCodecError::bit_count_out_of_range(bit_count, available));
        }

        Ok(Self {
            data,
            bit_count,
            position: 0,
        })
    }

    /// Read the next bit, or `None` once `bit_count` bits have been read.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_count {
            return None;
        }

        let byte = self.data[(self.position / 8) as usize];
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;

        Some((byte >> shift) & 1 == 1)
    }

    /// Bits consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bits left before the declared end.
    pub fn remaining(&self) -> u64 {
        self.bit_count - self.position
    }

    /// Declared bit count.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

/// Pack a bit sequence into the minimal zero-padded byte buffer.
pub fn pack_bits(bits: &[bool]) -> PackedBits {
    let mut writer = BitWriter::with_capacity(bits.len() as u64);
    writer.write_bits(bits);
    writer.finish()
}

/// Unpack exactly `bit_count` bits from `data`, ignoring trailing padding.
pub fn unpack_bits(data: &[u8], bit_count: u64) -> Result<Vec<bool>> {
    Ok(BitReader::new(data, bit_count)?.collect())
}
