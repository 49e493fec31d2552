//! Ordered value sequences operated on by the sorting and searching runners
//!
//! A [`Sequence`] is the array shown on screen as bars. Values are
//! non-negative by construction, which keeps counting and radix sort total
//! over every sequence that can be built.

use std::collections::HashMap;
use std::fmt;

/// Anything that can be ordered by a non-negative integer key
///
/// Sorting routines only ever look at the key, so an implementor may carry
/// a payload alongside it. Tests use this to observe stability.
pub trait Keyed: Clone {
    /// Sort key of the element
    fn key(&self) -> u32;
}

impl Keyed for u32 {
    fn key(&self) -> u32 {
        *self
    }
}

impl<T: Clone> Keyed for (u32, T) {
    fn key(&self) -> u32 {
        self.0
    }
}

/// Ordered list of values subject to a sort or a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u32>,
}

impl Sequence {
    /// Wrap an existing vector of values
    pub const fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Sequence without any elements
    pub const fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// Borrow the values in order
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Consume the sequence and return its values
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    /// Number of elements
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence has no elements
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, or `None` for an empty sequence
    pub fn max_value(&self) -> Option<u32> {
        self.values.iter().copied().max()
    }

    /// Whether values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        is_non_decreasing(&self.values)
    }

    /// Return a copy sorted in non-decreasing order
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut values = self.values.clone();
        values.sort_unstable();
        Self { values }
    }

    /// Whether `other` holds the same multiset of values
    pub fn is_permutation_of(&self, other: &[u32]) -> bool {
        is_permutation(&self.values, other)
    }
}

impl From<Vec<u32>> for Sequence {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Whether a slice is in non-decreasing order
pub fn is_non_decreasing(values: &[u32]) -> bool {
    values.windows(2).all(|pair| match pair {
        [a, b] => a <= b,
        _ => true,
    })
}

/// Whether two slices contain the same values with the same multiplicities
pub fn is_permutation(a: &[u32], b: &[u32]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut tally: HashMap<u32, i64> = HashMap::new();
    for &value in a {
        *tally.entry(value).or_insert(0) += 1;
    }
    for &value in b {
        *tally.entry(value).or_insert(0) -= 1;
    }
    tally.values().all(|&count| count == 0)
}
