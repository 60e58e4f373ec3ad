//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index outside the circuit's register.
    #[error("Qubit {qubit} out of range for circuit with {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: usize,
    },

    /// The same qubit was used twice in one operation.
    #[error("Duplicate qubit {0} in operation")]
    DuplicateQubit(QubitId),

    /// A binding named a parameter the circuit does not contain.
    #[error("Unknown parameter '{0}' in binding")]
    UnknownParameter(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
