//! Max-Cut problem graphs.
//!
//! The Max-Cut problem: Given a graph G = (V, E), partition vertices into
//! two sets S and T to maximize the number of edges between S and T.
//! Benchmark instances are drawn at a target edge density; a handful of
//! fixed small graphs exist for tests and demos.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, QaoaError};

/// An undirected graph with integer-labeled nodes `0..n_nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of nodes.
    pub n_nodes: usize,
    /// Edges as unordered node pairs, stored with the smaller index first.
    pub edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Create a new graph from an edge list.
    pub fn new(n_nodes: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            n_nodes,
            edges: edges
                .into_iter()
                .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
                .collect(),
        }
    }

    /// Create a 4-node square graph (simple demo case).
    ///
    /// ```text
    /// 0 --- 1
    /// |     |
    /// 3 --- 2
    /// ```
    pub fn square_4() -> Self {
        Self::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)])
    }

    /// Create a 6-node ring graph.
    pub fn ring_6() -> Self {
        Self::new(6, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])
    }

    /// Create a random graph with a target edge density.
    ///
    /// The full edge list of the complete graph is enumerated once and
    /// `round(density · C(n, 2))` edges are drawn from it uniformly without
    /// replacement, so the edge count is exact, not expected. All
    /// randomness comes from `seed`.
    ///
    /// `n_nodes < 2` leaves the candidate list empty and yields an edgeless
    /// graph; validating that upstream is the caller's responsibility.
    pub fn random_with_density(n_nodes: usize, density: f64, seed: u64) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(QaoaError::Config(format!(
                "density must lie in [0, 1], got {density}"
            )));
        }

        let mut pool: Vec<(usize, usize)> = (0..n_nodes)
            .flat_map(|i| ((i + 1)..n_nodes).map(move |j| (i, j)))
            .collect();
        let num_edges = (pool.len() as f64 * density).round() as usize;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = Vec::with_capacity(num_edges);
        for _ in 0..num_edges {
            let k = rng.gen_range(0..pool.len());
            edges.push(pool.swap_remove(k));
        }
        edges.sort_unstable();

        Ok(Self::new(n_nodes, edges))
    }

    /// Get the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Maximum possible number of edges, C(n, 2).
    pub fn max_edges(&self) -> usize {
        self.n_nodes * self.n_nodes.saturating_sub(1) / 2
    }

    /// Calculate the cut value for a given assignment.
    ///
    /// `assignment[i] = true` means node i is in set S.
    pub fn cut_value(&self, assignment: &[bool]) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| assignment[*a] != assignment[*b])
            .count()
    }

    /// Calculate the cut value from a bitstring, where character `k`
    /// (from the left) assigns node `k`.
    pub fn cut_value_from_bitstring(&self, bitstring: &str) -> CoreResult<usize> {
        let assignment = parse_bitstring(bitstring, self.n_nodes)?;
        Ok(self.cut_value(&assignment))
    }

    /// Find the maximum cut value by brute force (for small graphs).
    pub fn max_cut_brute_force(&self) -> (Vec<bool>, usize) {
        assert!(self.n_nodes <= 24, "Brute force limited to 24 nodes");
        let mut best_assignment = vec![false; self.n_nodes];
        let mut best_value = 0;

        for index in 0u64..(1 << self.n_nodes) {
            let assignment: Vec<bool> =
                (0..self.n_nodes).map(|i| (index >> i) & 1 == 1).collect();
            let value = self.cut_value(&assignment);
            if value > best_value {
                best_value = value;
                best_assignment = assignment;
            }
        }

        (best_assignment, best_value)
    }

    /// Split an assignment into the two node sets.
    pub fn partition(&self, assignment: &[bool]) -> (Vec<usize>, Vec<usize>) {
        let mut set_s = vec![];
        let mut set_t = vec![];
        for (i, &in_s) in assignment.iter().enumerate() {
            if in_s {
                set_s.push(i);
            } else {
                set_t.push(i);
            }
        }
        (set_s, set_t)
    }
}

/// Decode a bitstring into a boolean assignment, validating length and
/// characters.
pub(crate) fn parse_bitstring(bitstring: &str, expected: usize) -> CoreResult<Vec<bool>> {
    if bitstring.len() != expected {
        return Err(QaoaError::BitstringLength {
            expected,
            got: bitstring.len(),
        });
    }
    bitstring
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(QaoaError::InvalidBitstring(bitstring.to_string())),
        })
        .collect()
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph ({} nodes, {} edges):",
            self.n_nodes,
            self.edges.len()
        )?;
        for (a, b) in &self.edges {
            writeln!(f, "  {a} -- {b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_graph() {
        let g = Graph::square_4();
        assert_eq!(g.n_nodes, 4);
        assert_eq!(g.num_edges(), 4);
    }

    #[test]
    fn test_cut_value() {
        let g = Graph::square_4();

        // All in same set: cut = 0
        assert_eq!(g.cut_value(&[true, true, true, true]), 0);

        // Alternating: cut = 4 (all edges cut)
        assert_eq!(g.cut_value(&[true, false, true, false]), 4);

        // Half-half: cut = 2
        assert_eq!(g.cut_value(&[true, true, false, false]), 2);
    }

    #[test]
    fn test_max_cut_brute_force() {
        let g = Graph::square_4();
        let (best, value) = g.max_cut_brute_force();

        // For the square, max cut is 4 (alternating pattern).
        assert_eq!(value, 4);
        assert!(best == vec![true, false, true, false] || best == vec![false, true, false, true]);
    }

    #[test]
    fn test_random_density_extremes() {
        let empty = Graph::random_with_density(6, 0.0, 1).unwrap();
        assert_eq!(empty.num_edges(), 0);

        let complete = Graph::random_with_density(6, 1.0, 1).unwrap();
        assert_eq!(complete.num_edges(), 15);
    }

    #[test]
    fn test_random_edge_count_exact() {
        let g = Graph::random_with_density(8, 0.5, 99).unwrap();
        // round(0.5 * 28) = 14
        assert_eq!(g.num_edges(), 14);
    }

    #[test]
    fn test_random_no_self_loops_or_duplicates() {
        let g = Graph::random_with_density(10, 0.7, 5).unwrap();
        let mut seen = std::collections::HashSet::new();
        for &(a, b) in &g.edges {
            assert_ne!(a, b);
            assert!(a < b);
            assert!(seen.insert((a, b)), "duplicate edge ({a}, {b})");
        }
    }

    #[test]
    fn test_random_deterministic_per_seed() {
        let a = Graph::random_with_density(9, 0.4, 77).unwrap();
        let b = Graph::random_with_density(9, 0.4, 77).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_density() {
        assert!(Graph::random_with_density(5, 1.5, 0).is_err());
        assert!(Graph::random_with_density(5, -0.1, 0).is_err());
    }

    #[test]
    fn test_degenerate_single_node() {
        let g = Graph::random_with_density(1, 1.0, 0).unwrap();
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let g = Graph::random_with_density(7, 0.6, 11).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn test_parse_bitstring() {
        assert_eq!(
            parse_bitstring("0110", 4).unwrap(),
            vec![false, true, true, false]
        );
        assert!(matches!(
            parse_bitstring("011", 4),
            Err(QaoaError::BitstringLength { .. })
        ));
        assert!(matches!(
            parse_bitstring("01x0", 4),
            Err(QaoaError::InvalidBitstring(_))
        ));
    }
}
