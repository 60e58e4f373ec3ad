//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

/// Standard gates with known semantics.
///
/// The set is deliberately small: it covers the gates an alternating-layer
/// ansatz needs (superposition init, phase couplings, mixing rotations)
/// plus the entanglers a sampling evaluator decomposes them into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Y axis.
    Ry(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// ZZ coupling rotation: exp(-i θ/2 Z⊗Z).
    RZZ(ParameterExpression),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::RZZ(_) => "rzz",
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H
            | StandardGate::X
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_) => 1,
            StandardGate::CX | StandardGate::CZ | StandardGate::RZZ(_) => 2,
        }
    }

    /// Get the rotation angle, if this is a parameterized gate.
    pub fn parameter(&self) -> Option<&ParameterExpression> {
        match self {
            StandardGate::Rx(p)
            | StandardGate::Ry(p)
            | StandardGate::Rz(p)
            | StandardGate::RZZ(p) => Some(p),
            _ => None,
        }
    }

    /// Check if this gate carries an unbound symbolic parameter.
    pub fn is_symbolic(&self) -> bool {
        self.parameter().is_some_and(ParameterExpression::is_symbolic)
    }

    /// Return a copy with one symbol bound to a value.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        match self {
            StandardGate::Rx(p) => StandardGate::Rx(p.bind(name, value)),
            StandardGate::Ry(p) => StandardGate::Ry(p.bind(name, value)),
            StandardGate::Rz(p) => StandardGate::Rz(p.bind(name, value)),
            StandardGate::RZZ(p) => StandardGate::RZZ(p.bind(name, value)),
            g => g.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(
            StandardGate::RZZ(ParameterExpression::constant(0.5)).name(),
            "rzz"
        );
    }

    #[test]
    fn test_num_qubits() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(
            StandardGate::RZZ(ParameterExpression::constant(0.1)).num_qubits(),
            2
        );
    }

    #[test]
    fn test_bind() {
        let g = StandardGate::Rz(ParameterExpression::symbol("gamma_0"));
        assert!(g.is_symbolic());

        let bound = g.bind("gamma_0", 1.0);
        assert!(!bound.is_symbolic());
        assert_eq!(bound.parameter().and_then(|p| p.as_f64()), Some(1.0));
    }
}
