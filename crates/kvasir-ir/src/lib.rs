//! Kvasir Circuit Representation
//!
//! This crate provides the data structures for representing parameterized
//! quantum circuits in Kvasir. A circuit is an ordered list of instructions
//! over integer-addressed qubits; rotation angles may be concrete values or
//! symbolic parameters that are bound later via [`Circuit::assign_parameters`].
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for the built-in gate set (H, X, rotations,
//!   CX, CZ, RZZ)
//! - **Parameters**: [`ParameterExpression`] for symbolic angles in
//!   variational circuits
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Parameterized Ansatz Layer
//!
//! ```rust
//! use kvasir_ir::{Circuit, ParameterExpression, QubitId};
//! use std::collections::HashMap;
//!
//! let mut circuit = Circuit::with_size("layer", 2, 2);
//! let gamma = ParameterExpression::symbol("gamma_0");
//!
//! circuit.h(QubitId(0)).unwrap();
//! circuit.h(QubitId(1)).unwrap();
//! circuit
//!     .rzz(
//!         ParameterExpression::constant(0.5) * gamma,
//!         QubitId(0),
//!         QubitId(1),
//!     )
//!     .unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert!(circuit.is_parameterized());
//!
//! let mut bindings = HashMap::new();
//! bindings.insert("gamma_0".to_string(), 1.2);
//! let bound = circuit.assign_parameters(&bindings).unwrap();
//! assert!(!bound.is_parameterized());
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use parameter::ParameterExpression;
pub use qubit::{ClbitId, QubitId};
