//! SPSA (Simultaneous Perturbation Stochastic Approximation).
//!
//! Estimates the gradient from two evaluations along a random ±1
//! perturbation direction per iteration. Perturbation directions come from
//! an explicit seed, so two runs with the same configuration take the same
//! trajectory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use super::{OptimizationResult, Optimizer};
use crate::error::CoreResult;

/// SPSA optimizer configuration.
#[derive(Debug, Clone)]
pub struct Spsa {
    /// Maximum number of iterations.
    pub maxiter: usize,
    /// Initial learning rate.
    pub a: f64,
    /// Perturbation size.
    pub c: f64,
    /// Perturbation decay exponent.
    pub gamma: f64,
    /// Seed for the perturbation directions.
    pub seed: u64,
}

impl Default for Spsa {
    fn default() -> Self {
        Self {
            maxiter: 100,
            a: 0.1,
            c: 0.1,
            gamma: 0.101,
            seed: 42,
        }
    }
}

impl Spsa {
    /// Create an optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set the perturbation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Optimizer for Spsa {
    fn name(&self) -> &str {
        "spsa"
    }

    #[instrument(skip(self, objective, initial_params), fields(maxiter = self.maxiter))]
    fn minimize<F>(
        &self,
        mut objective: F,
        initial_params: Vec<f64>,
    ) -> CoreResult<OptimizationResult>
    where
        F: FnMut(&[f64]) -> CoreResult<f64>,
    {
        let n = initial_params.len();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut x = initial_params;
        let mut f_x = objective(&x)?;
        let mut evals = 1;

        let mut best_params = x.clone();
        let mut best_value = f_x;
        let mut history = vec![f_x];

        for k in 0..self.maxiter {
            let a_k = self.a / (k + 1) as f64;
            let c_k = self.c / ((k + 1) as f64).powf(self.gamma);

            // Rademacher perturbation direction.
            let delta: Vec<f64> = (0..n)
                .map(|_| if rng.gen_range(0..2) == 1 { 1.0 } else { -1.0 })
                .collect();

            let x_plus: Vec<f64> = x.iter().zip(&delta).map(|(xi, di)| xi + c_k * di).collect();
            let x_minus: Vec<f64> = x.iter().zip(&delta).map(|(xi, di)| xi - c_k * di).collect();

            let f_plus = objective(&x_plus)?;
            let f_minus = objective(&x_minus)?;
            evals += 2;

            for (xi, di) in x.iter_mut().zip(&delta) {
                let grad_i = (f_plus - f_minus) / (2.0 * c_k * di);
                *xi -= a_k * grad_i;
            }

            f_x = objective(&x)?;
            evals += 1;
            history.push(f_x);

            if f_x < best_value {
                best_value = f_x;
                best_params = x.clone();
            }
        }

        debug!(best_value, evals, "spsa finished");

        Ok(OptimizationResult {
            optimal_params: best_params,
            optimal_value: best_value,
            num_evaluations: evals,
            num_iterations: self.maxiter,
            history,
            converged: true,
        })
    }
}
