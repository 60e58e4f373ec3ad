//! High-level circuit builder API.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::parameter::ParameterExpression;
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// Instructions are stored in application order; evaluators replay them
/// front to back. The builder validates qubit indices at insertion time so
/// a constructed circuit is always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in application order.
    ops: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            ops: vec![],
        }
    }

    fn check_qubits(&self, qubits: &[QubitId]) -> IrResult<()> {
        for (i, q) in qubits.iter().enumerate() {
            if q.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit: *q,
                    num_qubits: self.num_qubits as usize,
                });
            }
            if qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit(*q));
            }
        }
        Ok(())
    }

    fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.check_qubits(&instruction.qubits)?;
        self.ops.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Ry(theta.into()),
            qubit,
        ))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rz(theta.into()),
            qubit,
        ))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CZ, q1, q2))
    }

    /// Apply RZZ (ZZ coupling rotation) gate.
    pub fn rzz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::RZZ(theta.into()),
            q1,
            q2,
        ))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure all qubits to corresponding classical bits.
    ///
    /// Qubit `k` is recorded in classical bit `k`; classical bits are added
    /// as needed. This fixed ordering is what downstream bitstring decoding
    /// relies on.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        if self.num_clbits < self.num_qubits {
            self.num_clbits = self.num_qubits;
        }
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        let clbits: Vec<_> = (0..self.num_qubits).map(ClbitId).collect();
        self.apply(Instruction::measure(qubits, clbits))
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.apply(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Get all unbound symbolic parameter names, in sorted order.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for op in &self.ops {
            if let InstructionKind::Gate(gate) = &op.kind {
                if let Some(expr) = gate.parameter() {
                    set.extend(expr.symbols());
                }
            }
        }
        set
    }

    /// Check if any gate still carries a symbolic parameter.
    pub fn is_parameterized(&self) -> bool {
        self.ops
            .iter()
            .any(|op| op.as_gate().is_some_and(StandardGate::is_symbolic))
    }

    /// Bind symbolic parameters to concrete values, returning a new circuit.
    ///
    /// Every name in `bindings` must exist in the circuit; symbols absent
    /// from the map stay symbolic. The original circuit is untouched, so a
    /// symbolic ansatz can be rebound for every evaluation.
    pub fn assign_parameters(&self, bindings: &HashMap<String, f64>) -> IrResult<Circuit> {
        let known = self.parameters();
        for name in bindings.keys() {
            if !known.contains(name) {
                return Err(IrError::UnknownParameter(name.clone()));
            }
        }

        let mut bound = self.clone();
        for op in &mut bound.ops {
            if let InstructionKind::Gate(gate) = &mut op.kind {
                for (name, value) in bindings {
                    *gate = gate.bind(name, *value);
                }
            }
        }
        Ok(bound)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the instructions in application order.
    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    /// Number of instructions (barriers included).
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Get the circuit depth (longest per-qubit instruction chain,
    /// barriers excluded).
    pub fn depth(&self) -> usize {
        let mut level = vec![0usize; self.num_qubits as usize];
        for op in &self.ops {
            if op.is_barrier() {
                continue;
            }
            let front = op
                .qubits
                .iter()
                .map(|q| level[q.0 as usize])
                .max()
                .unwrap_or(0);
            for q in &op.qubits {
                level[q.0 as usize] = front + 1;
            }
        }
        level.into_iter().max().unwrap_or(0)
    }
}
