//! The circuit evaluator trait.

use std::collections::HashMap;

use kvasir_ir::Circuit;

use crate::error::EvalResult;
use crate::result::ExecutionResult;

/// A collaborator that executes bound circuits and returns sampled counts.
///
/// This is the core's only external boundary. Implementations own all
/// backend detail: gate-basis adaptation, simulation strategy, hardware
/// queues. The core supplies a backend-agnostic circuit plus explicit
/// bindings, shot count, and seed.
///
/// # Contract
///
/// - Bind `bindings` into `circuit` before execution; reject circuits that
///   remain symbolic afterwards.
/// - The returned counts total the shot count, subject to the evaluator's
///   own shot-loss behavior, which the core does not control.
/// - Identical `(circuit, bindings, shots, seed)` MUST yield identical
///   counts; all randomness derives from `seed`.
/// - No retries: internal failures surface as errors and are treated as
///   fatal by callers.
pub trait Evaluator: Send + Sync {
    /// Get the name of this evaluator.
    fn name(&self) -> &str;

    /// Execute the circuit with the given parameter bindings and return
    /// the sampled outcome distribution.
    fn evaluate(
        &self,
        circuit: &Circuit,
        bindings: &HashMap<String, f64>,
        shots: u32,
        seed: u64,
    ) -> EvalResult<ExecutionResult>;
}
