//! Error types for the optimization core.
//!
//! The taxonomy mirrors how failures are handled: invalid configuration
//! fails fast before any circuit work, a degenerate sampling result aborts
//! the optimization step it occurred in, and evaluator-internal failures
//! pass through opaque and unretried.

use thiserror::Error;

/// Errors that can occur in the QAOA pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QaoaError {
    /// Invalid configuration, detected before any circuit work begins.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The parameter vector does not split evenly into beta and gamma halves.
    #[error("Parameter vector of length {0} cannot split into beta/gamma halves")]
    OddParameterCount(usize),

    /// An evaluation returned zero total counts.
    #[error("Evaluation returned zero total counts")]
    EmptyCounts,

    /// A sampled bitstring does not match the problem dimension.
    #[error("Bitstring length {got} does not match {expected} qubits")]
    BitstringLength {
        /// Expected bitstring length (number of qubits).
        expected: usize,
        /// Observed bitstring length.
        got: usize,
    },

    /// A sampled bitstring contains characters other than '0'/'1'.
    #[error("Invalid bitstring '{0}'")]
    InvalidBitstring(String),

    /// Circuit construction failed.
    #[error(transparent)]
    Ir(#[from] kvasir_ir::IrError),

    /// The external evaluator failed; opaque to the core and fatal.
    #[error(transparent)]
    Eval(#[from] kvasir_hal::EvalError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, QaoaError>;
