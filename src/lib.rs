//! A word-aligned hybrid compressed bitset for sparse sets of offsets.
//!
//! This crate provides [`Bitset`], a set of non-negative integer
//! offsets stored as a run-length encoded stream of 32-bit words, along
//! with [`Operation`] for composing many bitsets under boolean
//! operators and [`BitsetList`] for packing many bitsets into one
//! buffer. Queries, random mutation, population counts, and boolean
//! composition all work directly on the compressed form — there is no
//! decompression step anywhere.
//!
//! # Encoding
//!
//! The compression is tuned for sparse sets, where long runs of empty
//! 31-bit blocks are typically followed by a block containing a single
//! set bit. Two word variants are distinguished by the most significant
//! bit:
//!
//! ```text
//! literal: 0XXXXXXX XXXXXXXX XXXXXXXX XXXXXXXX
//! fill:    1CPPPPPL LLLLLLLL LLLLLLLL LLLLLLLL
//! ```
//!
//! A literal carries 31 raw bits. A fill covers `L` empty blocks and,
//! when `P` is non-zero, also absorbs the next block: that block's only
//! set bit sits at index `P - 1`, so the single-bit literal that would
//! normally follow the run is omitted entirely. `C` is a reserved color
//! bit, always zero. A lone far-away bit therefore costs one word, and
//! runs longer than 2²⁵ − 1 blocks chain multiple fills.
//!
//! # Examples
//!
//! ```
//! use plwah::{Bitset, Op, Operation, bitset};
//!
//! let mut b = Bitset::new();
//! b.set(31);
//! assert!(b.get(31));
//! assert_eq!(b.count(), 1);
//!
//! // Boolean composition without decompressing the operands.
//! let b1 = bitset![100, 200, 300];
//! let b2 = bitset![100];
//! let b3 = bitset![300, 400];
//! let mut plan = Operation::with_primary(&b1);
//! plan.add(&b2, Op::Or);
//! plan.add(&b3, Op::Or);
//! assert_eq!(plan.count(), 4);
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls; the crate itself is
//!   `no_std + alloc` without it.
//! - `offset64`: widens [`Offset`] to `u64`. The encoding is unchanged;
//!   far offsets are reached through chains of max-length fills.
//! - `serde`: `Serialize`/`Deserialize` for [`Bitset`] — offset
//!   sequences in human-readable formats, the packed word buffer in
//!   binary ones.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod bitset;
mod iter;
mod list;
mod macros;
mod ops;
mod ser;
mod storage;
mod traits;
mod word;

#[cfg(feature = "serde")]
mod serde;

pub use bitset::Bitset;
pub use iter::{IntoIter, Iter};
pub use list::{BitsetList, BitsetRef, ListIter};
pub use ops::{Op, Operation};
pub use ser::ParseError;

/// One encoded 32-bit word of the compressed stream.
pub type Word = u32;

/// A bit offset.
///
/// 32-bit by default; the `offset64` feature widens it to `u64`.
#[cfg(not(feature = "offset64"))]
pub type Offset = u32;

/// A bit offset.
///
/// 32-bit by default; the `offset64` feature widens it to `u64`.
#[cfg(feature = "offset64")]
pub type Offset = u64;
