//! Serde implementations for `Bitset`.
//!
//! Human-readable formats (JSON, YAML, ...) see a bitset as the
//! ascending sequence of its set offsets; binary formats get the
//! packed little-endian word buffer.

use alloc::vec::Vec;
use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{Bitset, Offset};

impl Serialize for Bitset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let mut seq = serializer.serialize_seq(Some(self.count() as usize))?;
            for offset in self.iter() {
                seq.serialize_element(&offset)?;
            }
            seq.end()
        } else {
            serializer.serialize_bytes(&self.to_le_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Bitset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_seq(OffsetsVisitor)
        } else {
            deserializer.deserialize_bytes(BytesVisitor)
        }
    }
}

struct OffsetsVisitor;

impl<'de> Visitor<'de> for OffsetsVisitor {
    type Value = Bitset;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of bit offsets")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Bitset, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bitset = Bitset::new();
        while let Some(offset) = seq.next_element::<Offset>()? {
            bitset.set(offset);
        }
        Ok(bitset)
    }
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Bitset;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("packed little-endian encoded words")
    }

    fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Bitset, E>
    where
        E: de::Error,
    {
        Bitset::from_le_bytes(bytes).map_err(de::Error::custom)
    }

    // Formats without a native byte type hand the buffer over as a
    // sequence of u8.
    fn visit_seq<A>(self, mut seq: A) -> Result<Bitset, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Bitset::from_le_bytes(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::Bitset;
    use serde_test::{Configure, Token, assert_tokens};

    #[test]
    #[cfg(not(feature = "offset64"))]
    fn readable_offsets() {
        let b = Bitset::from_bits(&[3, 64]);
        assert_tokens(
            &b.readable(),
            &[
                Token::Seq { len: Some(2) },
                Token::U32(3),
                Token::U32(64),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn compact_bytes() {
        let b = Bitset::from_bits(&[31]);
        assert_tokens(&b.compact(), &[Token::Bytes(&[0x01, 0x00, 0x00, 0x82])]);
    }

    #[test]
    fn json_roundtrip() {
        let b = Bitset::from_bits(&[3, 130, 1000, 1101]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[3,130,1000,1101]");
        let back: Bitset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
