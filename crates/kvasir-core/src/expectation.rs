//! Sampled energy expectation.
//!
//! One estimate is one evaluator call: bind the ansatz angles, collect
//! counts, and average the Ising energy of the sampled bitstrings weighted
//! by their frequency. The estimator carries a fixed seed that it passes on
//! every call, so the objective is a deterministic function of the angles
//! for a given evaluator.

use std::sync::Arc;

use kvasir_hal::{Counts, Evaluator};
use tracing::{debug, instrument};

use crate::ansatz::QaoaAnsatz;
use crate::error::{CoreResult, QaoaError};
use crate::ising::IsingModel;

/// Estimates ⟨E⟩ for a parameter vector by sampling through an evaluator.
pub struct ExpectationEstimator {
    evaluator: Arc<dyn Evaluator>,
    shots: u32,
    seed: u64,
}

impl ExpectationEstimator {
    /// Create an estimator over `evaluator` with a fixed shot budget and
    /// sampling seed.
    pub fn new(evaluator: Arc<dyn Evaluator>, shots: u32, seed: u64) -> CoreResult<Self> {
        if shots == 0 {
            return Err(QaoaError::Config(
                "shot budget must be positive".to_string(),
            ));
        }
        Ok(Self {
            evaluator,
            shots,
            seed,
        })
    }

    /// Shot budget per estimate.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Estimate the energy expectation at `theta`.
    #[instrument(skip(self, ansatz, ising), fields(evaluator = self.evaluator.name()))]
    pub fn estimate(
        &self,
        ansatz: &QaoaAnsatz,
        ising: &IsingModel,
        theta: &[f64],
    ) -> CoreResult<f64> {
        let counts = self.sample(ansatz, theta)?;
        let expectation = expectation_from_counts(&counts, ising)?;
        debug!(expectation, distinct = counts.len(), "estimated expectation");
        Ok(expectation)
    }

    /// Run the ansatz at `theta` and return the raw counts.
    pub fn sample(&self, ansatz: &QaoaAnsatz, theta: &[f64]) -> CoreResult<Counts> {
        let bindings = ansatz.bindings(theta)?;
        let result = self
            .evaluator
            .evaluate(ansatz.circuit(), &bindings, self.shots, self.seed)?;
        Ok(result.counts)
    }
}

/// Frequency-weighted average of the Ising energy over measured bitstrings.
pub fn expectation_from_counts(counts: &Counts, ising: &IsingModel) -> CoreResult<f64> {
    let total = counts.total();
    if total == 0 {
        return Err(QaoaError::EmptyCounts);
    }

    let mut weighted = 0.0;
    for (bitstring, count) in counts.iter() {
        weighted += ising.energy_from_bitstring(bitstring)? * count as f64;
    }
    Ok(weighted / total as f64)
}
