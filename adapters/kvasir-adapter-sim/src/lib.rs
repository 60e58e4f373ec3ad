//! Kvasir Local Sampling Simulator
//!
//! A statevector-based [`kvasir_hal::Evaluator`] for testing, development,
//! and small benchmark instances. The bound circuit is simulated once,
//! exactly, and the requested number of shots is then sampled from the
//! resulting output distribution with a seeded generator, so repeated
//! evaluations with the same seed are bit-for-bit reproducible.
//!
//! Memory grows as 2^n amplitudes; the default qubit budget is 20.
//!
//! # Example
//!
//! ```rust
//! use kvasir_adapter_sim::SimulatorEvaluator;
//! use kvasir_hal::Evaluator;
//! use kvasir_ir::{Circuit, QubitId};
//! use std::collections::HashMap;
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let evaluator = SimulatorEvaluator::new();
//! let result = evaluator
//!     .evaluate(&circuit, &HashMap::new(), 1000, 42)
//!     .unwrap();
//!
//! // A Bell state only ever measures 00 or 11.
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorEvaluator;
