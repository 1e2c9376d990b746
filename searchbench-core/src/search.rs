//! Search Algorithms
//!
//! Both algorithms count comparisons as their primary cost: one per element
//! inspected by the linear scan, one per midpoint probed by the bisection.

use serde::{Deserialize, Serialize};

/// Result of a single search invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Index of the match, `None` when the target is absent
    pub position: Option<usize>,
    /// Number of element comparisons performed
    pub comparisons: u64,
}

impl SearchOutcome {
    /// A successful search
    pub fn found(position: usize, comparisons: u64) -> Self {
        Self {
            position: Some(position),
            comparisons,
        }
    }

    /// An exhausted search
    pub fn not_found(comparisons: u64) -> Self {
        Self {
            position: None,
            comparisons,
        }
    }

    /// Whether the target was located
    pub fn is_found(&self) -> bool {
        self.position.is_some()
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "position {}, {} comparisons", pos, self.comparisons),
            None => write!(f, "not found, {} comparisons", self.comparisons),
        }
    }
}

/// The capability the trial runner measures
pub trait SearchAlgorithm {
    /// Stable identifier used in reports
    fn id(&self) -> &'static str;

    /// Locate `target` in `haystack`, counting comparisons
    fn search(&self, haystack: &[i64], target: i64) -> SearchOutcome;
}

/// Forward scan from the first element
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl SearchAlgorithm for LinearSearch {
    fn id(&self) -> &'static str {
        "linear"
    }

    fn search(&self, haystack: &[i64], target: i64) -> SearchOutcome {
        let mut comparisons = 0;
        for (index, &value) in haystack.iter().enumerate() {
            comparisons += 1;
            if value == target {
                return SearchOutcome::found(index, comparisons);
            }
        }
        SearchOutcome::not_found(comparisons)
    }
}

/// Midpoint bisection over a closed interval `[low, high]`
///
/// # Precondition
///
/// `haystack` must be sorted ascending. This is not checked; an unsorted
/// input produces an unreliable position but never panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl SearchAlgorithm for BinarySearch {
    fn id(&self) -> &'static str {
        "binary"
    }

    /// Requires `haystack` sorted ascending (see [`BinarySearch`]).
    fn search(&self, haystack: &[i64], target: i64) -> SearchOutcome {
        let mut comparisons = 0;
        if haystack.is_empty() {
            return SearchOutcome::not_found(comparisons);
        }

        let mut low = 0usize;
        let mut high = haystack.len() - 1;

        while low <= high {
            comparisons += 1;
            // floor((low + high) / 2) without overflow
            let mid = low + (high - low) / 2;

            match haystack[mid].cmp(&target) {
                std::cmp::Ordering::Equal => return SearchOutcome::found(mid, comparisons),
                std::cmp::Ordering::Less => low = mid + 1,
                std::cmp::Ordering::Greater => {
                    // high would become -1: interval is empty
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
            }
        }

        SearchOutcome::not_found(comparisons)
    }
}

/// The algorithms a study compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// [`LinearSearch`]
    Linear,
    /// [`BinarySearch`]
    Binary,
}

impl Algorithm {
    /// Every algorithm, baseline first
    pub const ALL: [Algorithm; 2] = [Algorithm::Linear, Algorithm::Binary];

    /// The implementation behind this variant
    pub fn searcher(self) -> &'static dyn SearchAlgorithm {
        match self {
            Algorithm::Linear => &LinearSearch,
            Algorithm::Binary => &BinarySearch,
        }
    }

    /// Worst-case comparison count for a sequence of length `n`
    pub fn comparison_bound(self, n: usize) -> u64 {
        match self {
            Algorithm::Linear => n as u64,
            // ceil(log2(n + 1)) == bit length of n
            Algorithm::Binary => u64::from(usize::BITS - n.leading_zeros()),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.searcher().id())
    }
}
