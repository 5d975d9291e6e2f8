//! Byte-buffer round-trip for the compressed word stream.
//!
//! The interchange format is the word stream itself, packed as
//! little-endian 32-bit words with no framing, magic, or version. The
//! byte length is therefore always a multiple of 4 and must be carried
//! out of band.

use alloc::vec::Vec;
use core::fmt;

use crate::{Bitset, Word, word};

/// Errors produced when decoding a bitset or bitset-list buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer length is not a multiple of the 4-byte word size.
    UnalignedBuffer {
        /// Byte length of the offending buffer.
        len: usize,
    },

    /// A fill word carries the reserved span-color bit. Color-1 fills
    /// are not part of the shipping encoding and are refused rather
    /// than misread.
    ReservedColorFill {
        /// Byte position of the offending word.
        at: usize,
    },

    /// A list entry ran past the end of the buffer.
    Truncated {
        /// Byte position where decoding stopped.
        at: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnalignedBuffer { len } => {
                write!(f, "buffer length {len} is not a multiple of 4")
            }
            Self::ReservedColorFill { at } => {
                write!(f, "fill word at byte {at} has the reserved color bit set")
            }
            Self::Truncated { at } => {
                write!(f, "buffer is truncated at byte {at}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl Bitset {
    /// Byte length of the encoded stream (4 bytes per word).
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.words.len() * 4
    }

    /// Serializes the word stream as packed little-endian bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plwah::Bitset;
    /// let b = Bitset::from_bits(&[31]);
    /// let bytes = b.to_le_bytes();
    /// assert_eq!(bytes.len(), b.byte_len());
    /// assert_eq!(Bitset::from_le_bytes(&bytes).unwrap(), b);
    /// ```
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        bytes.extend(self.words.iter().flat_map(|w| w.to_le_bytes()));
        bytes
    }

    /// Reconstructs a bitset from packed little-endian words.
    ///
    /// # Errors
    ///
    /// Fails if the length is not a multiple of 4, or if a fill word
    /// carries the reserved color bit.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        if bytes.len() % 4 != 0 {
            return Err(ParseError::UnalignedBuffer { len: bytes.len() });
        }
        let mut words = Vec::with_capacity(bytes.len() / 4);
        for (i, c) in bytes.chunks_exact(4).enumerate() {
            let w = Word::from_le_bytes([c[0], c[1], c[2], c[3]]);
            if word::is_fill(w) && w & word::COLOR_BIT != 0 {
                return Err(ParseError::ReservedColorFill { at: i * 4 });
            }
            words.push(w);
        }
        Ok(Self { words })
    }
}
