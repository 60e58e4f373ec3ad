//! Kvasir Evaluator Abstraction Layer
//!
//! The optimization core never executes circuits itself. It hands a
//! parameterized circuit, a set of parameter bindings, a shot count, and a
//! seed to an [`Evaluator`] and receives back a distribution over measured
//! bitstrings. Everything backend-specific (gate-basis adaptation, noise,
//! queueing) lives behind that trait.
//!
//! # Contract
//!
//! - `evaluate(circuit, bindings, shots, seed)` returns an
//!   [`ExecutionResult`] whose [`Counts`] sum to at most `shots`.
//! - Given the same circuit, bindings, shots, and seed, an evaluator MUST
//!   return identical counts. The optimization loop's convergence depends
//!   on reproducible evaluations.
//! - The seed is an explicit argument. Evaluators must not fall back to
//!   process-wide random state, so two experiments can run side by side
//!   without interfering.
//!
//! # Example: a degenerate evaluator for tests
//!
//! ```rust
//! use kvasir_hal::{Counts, EvalResult, Evaluator, ExecutionResult};
//! use kvasir_ir::Circuit;
//! use std::collections::HashMap;
//!
//! struct AllZeros;
//!
//! impl Evaluator for AllZeros {
//!     fn name(&self) -> &str {
//!         "all-zeros"
//!     }
//!
//!     fn evaluate(
//!         &self,
//!         circuit: &Circuit,
//!         _bindings: &HashMap<String, f64>,
//!         shots: u32,
//!         _seed: u64,
//!     ) -> EvalResult<ExecutionResult> {
//!         let mut counts = Counts::new();
//!         counts.insert("0".repeat(circuit.num_qubits()), u64::from(shots));
//!         Ok(ExecutionResult::new(counts, shots))
//!     }
//! }
//! ```

pub mod error;
pub mod evaluator;
pub mod result;

pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use result::{Counts, ExecutionResult};
