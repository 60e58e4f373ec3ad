//! Error types for evaluator implementations.

use thiserror::Error;

/// Errors that can occur while evaluating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// Circuit rejected before execution.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds evaluator capabilities.
    #[error("Circuit exceeds evaluator capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// A gate parameter was still symbolic at execution time.
    #[error("Unbound parameter '{0}' at execution time")]
    UnboundParameter(String),

    /// Parameter binding failed.
    #[error(transparent)]
    Binding(#[from] kvasir_ir::IrError),

    /// Opaque evaluator-internal failure.
    #[error("Evaluator error: {0}")]
    Backend(String),
}

/// Result type for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
