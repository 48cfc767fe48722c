use std::fmt;

/// The candidate set of a single cell, over digits 1-9.
///
/// Stored as a bitmask, so the set is `Copy` and every operation returns a
/// new value rather than mutating in place. Iteration is always in ascending
/// digit order, which keeps candidate enumeration deterministic across runs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const ALL_DIGITS: u16 = 0b11_1111_1110;

impl DigitSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// The full domain {1..9}.
    pub fn all() -> Self {
        Self(ALL_DIGITS)
    }

    /// A one-element set.
    pub fn singleton(digit: u8) -> Self {
        Self::empty().with(digit)
    }

    /// Returns a copy with `digit` added.
    pub fn with(self, digit: u8) -> Self {
        debug_assert!((1..=9).contains(&digit));
        Self(self.0 | (1 << digit))
    }

    /// Returns a copy with `digit` removed.
    pub fn without(self, digit: u8) -> Self {
        debug_assert!((1..=9).contains(&digit));
        Self(self.0 & !(1 << digit))
    }

    /// Returns a copy with every digit of `other` removed.
    pub fn without_all(self, other: DigitSet) -> Self {
        Self(self.0 & !other.0)
    }

    /// Set intersection.
    pub fn intersection(self, other: DigitSet) -> Self {
        Self(self.0 & other.0)
    }

    pub fn contains(self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));
        self.0 & (1 << digit) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_singleton(self) -> bool {
        self.len() == 1
    }

    /// If the set holds exactly one digit, returns it.
    pub fn as_singleton(self) -> Option<u8> {
        if self.is_singleton() {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterates the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&d| self.contains(d))
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), DigitSet::with)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
