//! Buffer growth policy shared by the word stream and the list buffer.

use alloc::vec::Vec;

/// Grows `buf` so that `additional` more elements fit without further
/// allocation, rounding the new capacity up to a power of two.
///
/// Both the bitset word stream and the list byte buffer append in small
/// irregular increments; rounding keeps the reallocation count
/// logarithmic in the final length.
#[inline]
pub(crate) fn reserve_pow2<T>(buf: &mut Vec<T>, additional: usize) {
    let needed = buf.len().saturating_add(additional);
    if needed > buf.capacity() {
        buf.reserve_exact(needed.next_power_of_two() - buf.len());
    }
}
