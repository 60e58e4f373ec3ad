//! Derivative-free classical optimizers.
//!
//! The objective is fallible: a single failed evaluation (evaluator error,
//! degenerate counts) aborts the run and surfaces the error, rather than
//! being papered over with a sentinel value.

mod cobyla;
mod spsa;

pub use cobyla::Cobyla;
pub use spsa::Spsa;

use crate::error::CoreResult;

/// Outcome of a minimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best parameter vector found.
    pub optimal_params: Vec<f64>,
    /// Objective value at the best point.
    pub optimal_value: f64,
    /// Total objective evaluations.
    pub num_evaluations: usize,
    /// Iterations performed.
    pub num_iterations: usize,
    /// Best objective value after each improving iteration.
    pub history: Vec<f64>,
    /// Whether the stopping tolerance was reached before the iteration cap.
    pub converged: bool,
}

/// A derivative-free minimizer over ℝⁿ.
pub trait Optimizer {
    /// Optimizer name for logs and reports.
    fn name(&self) -> &str;

    /// Minimize `objective` starting from `initial_params`.
    ///
    /// The first objective error encountered aborts the run.
    fn minimize<F>(&self, objective: F, initial_params: Vec<f64>) -> CoreResult<OptimizationResult>
    where
        F: FnMut(&[f64]) -> CoreResult<f64>;
}
