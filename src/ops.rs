//! Boolean composition of bitsets in compressed form.
//!
//! An [`Operation`] is a left-fold plan: a primary operand followed by
//! steps that each combine one more operand into the running result.
//! Operands are borrowed bitsets, borrowed list-entry views, or nested
//! operations. Execution never decompresses anybody: every operand is
//! walked as a stream of non-empty 31-bit blocks, the streams advance
//! in lockstep over the union of their block indices, and the folded
//! payloads are re-encoded on the fly.

use alloc::vec::Vec;

use crate::{
    Bitset, Offset, Word,
    iter::{Blocks, WordIter},
    list::BitsetRef,
    storage, word,
};

/// A combining operator over 31-bit block payloads.
///
/// `AndNot` keeps the bits of the running result that the operand does
/// not have (relative complement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Intersection: keeps the bits both sides have.
    And,
    /// Union: merges the bits of both sides.
    Or,
    /// Symmetric difference: keeps the bits exactly one side has.
    Xor,
    /// Relative complement: keeps the running result's bits that the
    /// operand does not have.
    AndNot,
}

impl Op {
    #[inline]
    pub(crate) fn apply(self, acc: Word, operand: Word) -> Word {
        match self {
            Self::And => acc & operand,
            Self::Or => acc | operand,
            Self::Xor => acc ^ operand,
            Self::AndNot => acc & !operand,
        }
    }
}

enum Operand<'a> {
    Set(&'a Bitset),
    View(BitsetRef<'a>),
    Nested(Operation<'a>),
}

struct Step<'a> {
    op: Op,
    operand: Operand<'a>,
}

/// A boolean expression over bitsets, evaluated without decompression.
///
/// The fold starts from an empty running result, so the first step is
/// ordinarily added with [`Op::Or`] (which [`Operation::with_primary`]
/// does for you). Input bitsets are borrowed for the lifetime of the
/// operation and must not be mutated while it is alive — the borrow
/// checker enforces exactly that.
///
/// # Examples
///
/// ```
/// use plwah::{Bitset, Op, Operation};
///
/// let b1 = Bitset::from_bits(&[100, 200, 300]);
/// let b2 = Bitset::from_bits(&[100]);
/// let b3 = Bitset::from_bits(&[300, 400]);
///
/// let mut inner = Operation::with_primary(&b2);
/// inner.add(&b3, Op::Or);
///
/// let mut outer = Operation::with_primary(&b1);
/// outer.add_nested(inner, Op::And);
///
/// let result = outer.exec();
/// assert_eq!(result.iter().collect::<Vec<_>>(), [100, 300]);
/// ```
#[derive(Default)]
pub struct Operation<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Operation<'a> {
    /// Creates an operation with no steps (an empty primary).
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Creates an operation whose running result starts as `primary`.
    #[must_use]
    pub fn with_primary(primary: &'a Bitset) -> Self {
        let mut operation = Self::new();
        operation.add(primary, Op::Or);
        operation
    }

    /// Appends a step combining `bitset` into the running result.
    pub fn add(&mut self, bitset: &'a Bitset, op: Op) {
        self.steps.push(Step {
            op,
            operand: Operand::Set(bitset),
        });
    }

    /// Appends a step combining a borrowed list-entry view.
    pub fn add_view(&mut self, view: BitsetRef<'a>, op: Op) {
        self.steps.push(Step {
            op,
            operand: Operand::View(view),
        });
    }

    /// Appends a step combining the result of a nested operation.
    ///
    /// The nested operation is evaluated when this one executes.
    pub fn add_nested(&mut self, nested: Operation<'a>, op: Op) {
        self.steps.push(Step {
            op,
            operand: Operand::Nested(nested),
        });
    }

    /// Number of steps, counting the primary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the operation has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Evaluates the plan into a new bitset.
    #[must_use]
    pub fn exec(&self) -> Bitset {
        let mut out = StreamBuilder::new();
        self.fold(|blk, payload| out.push(blk, payload));
        out.finish()
    }

    /// Population count of the result, without materializing it.
    #[must_use]
    pub fn count(&self) -> Offset {
        let mut total: Offset = 0;
        self.fold(|_, payload| total += word::popcount(payload) as Offset);
        total
    }

    /// Walks all operands in lockstep and hands every non-empty result
    /// block to `emit`, in ascending block order.
    fn fold(&self, mut emit: impl FnMut(Offset, Word)) {
        let resolved: Vec<ResolvedStep<'_>> = self.steps.iter().map(ResolvedStep::new).collect();
        let mut cursors: Vec<_> = resolved
            .iter()
            .map(|step| step.operand.blocks().peekable())
            .collect();
        loop {
            // The next event is the lowest block any operand still has
            // bits in; operands that are clean there contribute zero.
            let mut event: Option<Offset> = None;
            for cursor in &mut cursors {
                if let Some(&(blk, _)) = cursor.peek() {
                    event = Some(event.map_or(blk, |e| e.min(blk)));
                }
            }
            let Some(event) = event else { break };
            let mut acc: Word = 0;
            for (step, cursor) in resolved.iter().zip(&mut cursors) {
                let payload = match cursor.peek() {
                    Some(&(blk, payload)) if blk == event => {
                        cursor.next();
                        payload
                    }
                    _ => 0,
                };
                acc = step.op.apply(acc, payload);
            }
            if acc != 0 {
                emit(event, acc);
            }
        }
    }
}

enum ResolvedOperand<'a> {
    Set(&'a Bitset),
    View(BitsetRef<'a>),
    Owned(Bitset),
}

impl ResolvedOperand<'_> {
    fn blocks(&self) -> Blocks<WordIter<'_>> {
        match self {
            Self::Set(bitset) => bitset.blocks(),
            Self::View(view) => view.blocks(),
            Self::Owned(bitset) => bitset.blocks(),
        }
    }
}

struct ResolvedStep<'a> {
    op: Op,
    operand: ResolvedOperand<'a>,
}

impl<'a> ResolvedStep<'a> {
    fn new(step: &'a Step<'a>) -> Self {
        let operand = match &step.operand {
            Operand::Set(bitset) => ResolvedOperand::Set(*bitset),
            Operand::View(view) => ResolvedOperand::View(*view),
            Operand::Nested(inner) => ResolvedOperand::Owned(inner.exec()),
        };
        Self {
            op: step.op,
            operand,
        }
    }
}

/// Re-encodes an ascending stream of non-empty blocks into canonical
/// compressed form: gaps become (chains of) fills, and a gap followed
/// by a single-bit block is absorbed into the fill's position field.
pub(crate) struct StreamBuilder {
    words: Vec<Word>,
    next_blk: Offset,
}

impl StreamBuilder {
    pub(crate) fn new() -> Self {
        Self {
            words: Vec::new(),
            next_blk: 0,
        }
    }

    pub(crate) fn push(&mut self, blk: Offset, payload: Word) {
        debug_assert!(blk >= self.next_blk);
        debug_assert!(payload != 0 && word::is_literal(payload));
        let mut gap = blk - self.next_blk;
        self.next_blk = blk + 1;
        if gap == 0 {
            // Every prior emission ends in a bit-bearing word, so the
            // payload can only land as a literal here.
            self.words.push(payload);
            return;
        }
        storage::reserve_pow2(&mut self.words, (gap / word::MAX_FILL_LENGTH) as usize + 2);
        while gap > word::MAX_FILL_LENGTH {
            self.words.push(word::fill(word::MAX_FILL_LENGTH, None));
            gap -= word::MAX_FILL_LENGTH;
        }
        if payload.count_ones() == 1 {
            self.words.push(word::fill(gap, Some(word::first_bit(payload))));
        } else {
            self.words.push(word::fill(gap, None));
            self.words.push(payload);
        }
    }

    pub(crate) fn finish(self) -> Bitset {
        Bitset { words: self.words }
    }
}
