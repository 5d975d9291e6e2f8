//! Trait implementations for `Bitset`.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::{Bitset, Op, Operation};

impl Default for Bitset {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

fn combine(a: &Bitset, b: &Bitset, op: Op) -> Bitset {
    let mut operation = Operation::new();
    operation.add(a, Op::Or);
    operation.add(b, op);
    operation.exec()
}

impl BitOr for &Bitset {
    type Output = Bitset;

    /// Union via the streaming operation engine.
    fn bitor(self, rhs: Self) -> Bitset {
        combine(self, rhs, Op::Or)
    }
}

impl BitAnd for &Bitset {
    type Output = Bitset;

    /// Intersection via the streaming operation engine.
    fn bitand(self, rhs: Self) -> Bitset {
        combine(self, rhs, Op::And)
    }
}

impl BitXor for &Bitset {
    type Output = Bitset;

    /// Symmetric difference via the streaming operation engine.
    fn bitxor(self, rhs: Self) -> Bitset {
        combine(self, rhs, Op::Xor)
    }
}

impl Sub for &Bitset {
    type Output = Bitset;

    /// Relative complement (`self & !rhs`) via the streaming operation
    /// engine.
    fn sub(self, rhs: Self) -> Bitset {
        combine(self, rhs, Op::AndNot)
    }
}
