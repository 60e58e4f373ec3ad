//! QUBO (Quadratic Unconstrained Binary Optimization) encoding.
//!
//! A QUBO instance is a real square matrix H; the objective is to minimize
//! xᵀHx over binary vectors x. Max-Cut maps onto this form with one binary
//! variable per node.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::problems::graph::{parse_bitstring, Graph};

/// A QUBO problem: minimize xᵀHx over x ∈ {0,1}ⁿ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qubo {
    matrix: Array2<f64>,
}

impl Qubo {
    /// Wrap an existing coefficient matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn new(matrix: Array2<f64>) -> Self {
        assert_eq!(matrix.nrows(), matrix.ncols(), "QUBO matrix must be square");
        Self { matrix }
    }

    /// Encode a Max-Cut instance.
    ///
    /// Each edge (u, v) contributes `-x_u - x_v + 2·x_u·x_v`, which is -1
    /// exactly when the edge is cut and 0 otherwise. Minimizing the QUBO
    /// objective therefore maximizes the cut, and the objective value at a
    /// partition equals the negated cut size.
    pub fn from_maxcut(graph: &Graph) -> Self {
        let n = graph.n_nodes;
        let mut matrix = Array2::zeros((n, n));
        for &(u, v) in &graph.edges {
            matrix[[u, u]] += -1.0;
            matrix[[v, v]] += -1.0;
            matrix[[u, v]] += 2.0;
        }
        Self { matrix }
    }

    /// Number of binary variables (one per node for Max-Cut).
    pub fn num_vars(&self) -> usize {
        self.matrix.nrows()
    }

    /// The coefficient matrix H.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Evaluate xᵀHx for a binary assignment.
    pub fn objective(&self, assignment: &[bool]) -> f64 {
        let n = self.num_vars();
        debug_assert_eq!(assignment.len(), n);
        let mut value = 0.0;
        for i in 0..n {
            if !assignment[i] {
                continue;
            }
            for j in 0..n {
                if assignment[j] {
                    value += self.matrix[[i, j]];
                }
            }
        }
        value
    }

    /// Evaluate the objective for a bitstring, where character `k` (from
    /// the left) assigns variable `k`.
    pub fn objective_from_bitstring(&self, bitstring: &str) -> CoreResult<f64> {
        let assignment = parse_bitstring(bitstring, self.num_vars())?;
        Ok(self.objective(&assignment))
    }
}
