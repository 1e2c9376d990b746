//! Sequence Generator
//!
//! Produces the fixed, sorted input shared by both algorithms of a trial.

use std::ops::Deref;

/// An immutable, strictly increasing sequence of integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Box<[i64]>,
}

impl Sequence {
    /// The integers `1..=size` in order. `size == 0` yields an empty sequence.
    pub fn generate(size: usize) -> Self {
        Self {
            values: (1..=size as i64).collect(),
        }
    }

    /// Borrow the underlying values
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Largest value, `None` when empty
    pub fn max_value(&self) -> Option<i64> {
        self.values.last().copied()
    }
}

impl Deref for Sequence {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.values
    }
}

impl AsRef<[i64]> for Sequence {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}
