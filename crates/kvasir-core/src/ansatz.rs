//! QAOA ansatz construction.
//!
//! The ansatz alternates a problem unitary (phases weighted by the Ising
//! coefficients, angle γ) and a mixer unitary (RX rotations, angle β) for a
//! configured number of layers. The circuit is built once with symbolic
//! angles; each optimization step only rebinds them.

use std::collections::HashMap;

use kvasir_ir::{Circuit, ParameterExpression, QubitId};
use tracing::debug;

use crate::error::{CoreResult, QaoaError};
use crate::ising::IsingModel;

/// A symbolic QAOA circuit for a fixed Ising Hamiltonian and layer count.
#[derive(Debug, Clone)]
pub struct QaoaAnsatz {
    circuit: Circuit,
    num_qubits: usize,
    layers: usize,
}

impl QaoaAnsatz {
    /// Build the ansatz for `ising` with `layers` alternating layers.
    ///
    /// Layer l introduces the symbols `beta_l` and `gamma_l`. Per layer:
    /// RZZ(2·J_{ij}·γ) for every coupling, RZ(2·hᵢ·γ) for every nonzero
    /// field, then RX(2·β) on every qubit. State preparation is a Hadamard
    /// on every qubit and the circuit ends with full measurement.
    pub fn build(ising: &IsingModel, layers: usize) -> CoreResult<Self> {
        if layers == 0 {
            return Err(QaoaError::Config(
                "ansatz needs at least one layer".to_string(),
            ));
        }
        let num_qubits = ising.num_spins();
        if num_qubits == 0 {
            return Err(QaoaError::Config(
                "Hamiltonian has no spins".to_string(),
            ));
        }

        let mut circuit = Circuit::with_size("qaoa", num_qubits as u32, num_qubits as u32);

        for q in 0..num_qubits {
            circuit.h(QubitId(q as u32))?;
        }

        for l in 0..layers {
            let gamma = ParameterExpression::symbol(format!("gamma_{l}"));
            let beta = ParameterExpression::symbol(format!("beta_{l}"));

            for &(i, j, jij) in ising.couplings() {
                let angle = ParameterExpression::from(2.0 * jij) * gamma.clone();
                circuit.rzz(angle, QubitId(i as u32), QubitId(j as u32))?;
            }
            for (i, &hi) in ising.fields().iter().enumerate() {
                if hi != 0.0 {
                    let angle = ParameterExpression::from(2.0 * hi) * gamma.clone();
                    circuit.rz(angle, QubitId(i as u32))?;
                }
            }
            for q in 0..num_qubits {
                let angle = ParameterExpression::from(2.0) * beta.clone();
                circuit.rx(angle, QubitId(q as u32))?;
            }
        }

        circuit.measure_all()?;

        debug!(
            num_qubits,
            layers,
            ops = circuit.num_ops(),
            "built ansatz"
        );

        Ok(Self {
            circuit,
            num_qubits,
            layers,
        })
    }

    /// The symbolic circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Number of qubits (one per spin).
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Total number of variational parameters, 2·layers.
    pub fn num_parameters(&self) -> usize {
        2 * self.layers
    }

    /// Bind a flat parameter vector and return the concrete circuit.
    pub fn bound_circuit(&self, theta: &[f64]) -> CoreResult<Circuit> {
        let bindings = self.bindings(theta)?;
        Ok(self.circuit.assign_parameters(&bindings)?)
    }

    /// Map a flat parameter vector to symbol bindings.
    ///
    /// The layout is `[beta_0, .., beta_{p-1}, gamma_0, .., gamma_{p-1}]`.
    pub fn bindings(&self, theta: &[f64]) -> CoreResult<HashMap<String, f64>> {
        if theta.len() != self.num_parameters() {
            return Err(QaoaError::OddParameterCount(theta.len()));
        }
        let (betas, gammas) = theta.split_at(self.layers);

        let mut bindings = HashMap::with_capacity(theta.len());
        for (l, &b) in betas.iter().enumerate() {
            bindings.insert(format!("beta_{l}"), b);
        }
        for (l, &g) in gammas.iter().enumerate() {
            bindings.insert(format!("gamma_{l}"), g);
        }
        Ok(bindings)
    }
}
