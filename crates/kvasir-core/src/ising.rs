//! QUBO to Ising mapping.
//!
//! The variable change s = 2x - 1 turns a QUBO objective xᵀHx over
//! x ∈ {0,1}ⁿ into an Ising Hamiltonian over spins s ∈ {-1,+1}ⁿ:
//!
//! ```text
//! E(s) = Σᵢ hᵢ·sᵢ + Σ_{i<j} J_{ij}·sᵢ·sⱼ + C
//! ```
//!
//! The spin values feed the phase-separation angles of the ansatz; the
//! constant C only shifts the energy and never enters a circuit.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::problems::graph::parse_bitstring;
use crate::problems::Qubo;

/// An Ising Hamiltonian with linear fields, pairwise couplings, and a
/// constant offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsingModel {
    /// Linear field hᵢ per spin.
    h: Vec<f64>,
    /// Couplings J_{ij}, stored sparse with i < j. Zero couplings are
    /// dropped so the ansatz never emits an identity interaction.
    j: Vec<(usize, usize, f64)>,
    /// Constant energy offset C.
    offset: f64,
}

impl IsingModel {
    /// Map a QUBO instance to its Ising form.
    ///
    /// For H with diagonal dᵢ and off-diagonal entries summed symmetrically
    /// (H[i][j] + H[j][i] for i < j):
    ///
    /// ```text
    /// hᵢ     = dᵢ/2 + Σ_{j≠i} (H[i][j] + H[j][i]) / 4
    /// J_{ij} = (H[i][j] + H[j][i]) / 4
    /// C      = Σᵢ dᵢ/2 + Σ_{i<j} (H[i][j] + H[j][i]) / 4
    /// ```
    ///
    /// so that E(s) reproduces xᵀHx exactly under s = 2x - 1.
    pub fn from_qubo(qubo: &Qubo) -> Self {
        let n = qubo.num_vars();
        let m = qubo.matrix();

        let mut h = vec![0.0; n];
        let mut j = Vec::new();
        let mut offset = 0.0;

        for i in 0..n {
            let d = m[[i, i]];
            h[i] += d / 2.0;
            offset += d / 2.0;
        }
        for i in 0..n {
            for k in (i + 1)..n {
                let coupling = (m[[i, k]] + m[[k, i]]) / 4.0;
                if coupling != 0.0 {
                    j.push((i, k, coupling));
                }
                h[i] += coupling;
                h[k] += coupling;
                offset += coupling;
            }
        }

        Self { h, j, offset }
    }

    /// Number of spins.
    pub fn num_spins(&self) -> usize {
        self.h.len()
    }

    /// Linear fields, one per spin.
    pub fn fields(&self) -> &[f64] {
        &self.h
    }

    /// Nonzero pairwise couplings, with i < j.
    pub fn couplings(&self) -> &[(usize, usize, f64)] {
        &self.j
    }

    /// Constant energy offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Evaluate E(s) including the offset. `spins[i]` must be ±1.
    pub fn energy(&self, spins: &[f64]) -> f64 {
        debug_assert_eq!(spins.len(), self.h.len());
        let mut e = self.offset;
        for (hi, si) in self.h.iter().zip(spins) {
            e += hi * si;
        }
        for &(i, j, jij) in &self.j {
            e += jij * spins[i] * spins[j];
        }
        e
    }

    /// Evaluate E for a bitstring under s = 2x - 1, where character `k`
    /// (from the left) assigns spin `k`.
    pub fn energy_from_bitstring(&self, bitstring: &str) -> CoreResult<f64> {
        let assignment = parse_bitstring(bitstring, self.num_spins())?;
        let spins: Vec<f64> = assignment
            .iter()
            .map(|&x| if x { 1.0 } else { -1.0 })
            .collect();
        Ok(self.energy(&spins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::Graph;

    #[test]
    fn test_single_edge_mapping() {
        // One cut edge: h = 0, J = 0.5, C = -0.5.
        let qubo = Qubo::from_maxcut(&Graph::new(2, vec![(0, 1)]));
        let ising = IsingModel::from_qubo(&qubo);

        assert_eq!(ising.fields(), &[0.0, 0.0]);
        assert_eq!(ising.couplings(), &[(0, 1, 0.5)]);
        assert_eq!(ising.offset(), -0.5);

        // Aligned spins: E = 0 (edge uncut). Opposite: E = -1.
        assert_eq!(ising.energy(&[1.0, 1.0]), 0.0);
        assert_eq!(ising.energy(&[1.0, -1.0]), -1.0);
    }

    #[test]
    fn test_energy_matches_qubo_exhaustively() {
        let qubo = Qubo::from_maxcut(&Graph::square_4());
        let ising = IsingModel::from_qubo(&qubo);

        for index in 0..16u32 {
            let assignment: Vec<bool> = (0..4).map(|i| (index >> i) & 1 == 1).collect();
            let spins: Vec<f64> = assignment
                .iter()
                .map(|&x| if x { 1.0 } else { -1.0 })
                .collect();
            let diff = (ising.energy(&spins) - qubo.objective(&assignment)).abs();
            assert!(diff < 1e-12, "mismatch at index {index}: {diff}");
        }
    }

    #[test]
    fn test_zero_couplings_dropped() {
        // Edgeless graph maps to an all-zero Hamiltonian.
        let qubo = Qubo::from_maxcut(&Graph::new(3, vec![]));
        let ising = IsingModel::from_qubo(&qubo);
        assert!(ising.couplings().is_empty());
        assert_eq!(ising.fields(), &[0.0, 0.0, 0.0]);
        assert_eq!(ising.offset(), 0.0);
    }

    #[test]
    fn test_energy_from_bitstring() {
        let qubo = Qubo::from_maxcut(&Graph::square_4());
        let ising = IsingModel::from_qubo(&qubo);

        assert_eq!(ising.energy_from_bitstring("0101").unwrap(), -4.0);
        assert_eq!(ising.energy_from_bitstring("1111").unwrap(), 0.0);
        assert!(ising.energy_from_bitstring("01").is_err());
    }
}
