//! Measurement outcome types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Occurrence counts of measured bitstrings for one evaluation.
///
/// Keys are fixed-length binary strings; the character at position `k`
/// (counting from the left) is the measured value of qubit `k`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `n` occurrences of a bitstring, accumulating with any
    /// previous occurrences.
    pub fn insert(&mut self, bitstring: impl Into<String>, n: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += n;
    }

    /// Get the count for a bitstring (zero if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct bitstrings observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The most frequently observed bitstring, if any.
    ///
    /// Ties are broken lexicographically so the answer is stable.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .max_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| kb.cmp(ka)))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, n) in iter {
            counts.insert(bitstring, n);
        }
        counts
    }
}

/// Result of one circuit evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Outcome distribution.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Wall-clock execution time, if the evaluator reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
