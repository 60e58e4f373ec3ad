//! Variational Max-Cut optimization via QAOA.
//!
//! This crate carries the classical side of the hybrid loop: problem graphs
//! and their QUBO encoding, the QUBO-to-Ising mapping, symbolic ansatz
//! construction, sampled energy expectations, and derivative-free
//! optimizers. Circuit evaluation itself goes through the
//! [`kvasir_hal::Evaluator`] trait, so the same pipeline runs against the
//! local simulator or any other conforming backend.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use kvasir_adapter_sim::SimulatorEvaluator;
//! use kvasir_core::optimizers::Cobyla;
//! use kvasir_core::problems::Graph;
//! use kvasir_core::QaoaRunner;
//!
//! # fn main() -> Result<(), kvasir_core::QaoaError> {
//! let graph = Graph::square_4();
//! let runner = QaoaRunner::new(Arc::new(SimulatorEvaluator::new()))
//!     .with_layers(1)
//!     .with_shots(512);
//! let result = runner.run(&graph, &Cobyla::new().with_maxiter(40))?;
//! assert_eq!(result.best_bitstring.len(), 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod ansatz;
pub mod error;
pub mod expectation;
pub mod ising;
pub mod optimizers;
pub mod problems;
pub mod runner;

pub use ansatz::QaoaAnsatz;
pub use error::{CoreResult, QaoaError};
pub use expectation::ExpectationEstimator;
pub use ising::IsingModel;
pub use runner::{QaoaResult, QaoaRunner};
