//! Simulator evaluator implementation.

use std::collections::HashMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use kvasir_hal::{Counts, EvalError, EvalResult, Evaluator, ExecutionResult};
use kvasir_ir::Circuit;

use crate::statevector::{sample_outcome, Statevector};

const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local statevector sampling evaluator.
///
/// The bound circuit is simulated exactly, once, and shots are then drawn
/// from the exact output distribution. All randomness comes from the seed
/// passed to [`Evaluator::evaluate`], never from process-wide state.
pub struct SimulatorEvaluator {
    /// Evaluator name reported to callers.
    name: String,
    /// Maximum number of qubits accepted.
    max_qubits: u32,
}

impl SimulatorEvaluator {
    /// Create a new simulator evaluator with default settings.
    pub fn new() -> Self {
        Self {
            name: "simulator".to_string(),
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a simulator with a custom qubit budget.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            name: "simulator".to_string(),
            max_qubits,
        }
    }

    fn validate(&self, circuit: &Circuit, shots: u32) -> EvalResult<()> {
        if shots == 0 {
            return Err(EvalError::InvalidShots(
                "shot count must be positive".to_string(),
            ));
        }
        if circuit.num_qubits() == 0 {
            return Err(EvalError::InvalidCircuit(
                "circuit has no qubits".to_string(),
            ));
        }
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(EvalError::CircuitTooLarge(format!(
                "circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }
        Ok(())
    }
}

impl Default for SimulatorEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for SimulatorEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, circuit, bindings))]
    fn evaluate(
        &self,
        circuit: &Circuit,
        bindings: &HashMap<String, f64>,
        shots: u32,
        seed: u64,
    ) -> EvalResult<ExecutionResult> {
        self.validate(circuit, shots)?;

        let bound = circuit.assign_parameters(bindings)?;
        if let Some(name) = bound.parameters().into_iter().next() {
            return Err(EvalError::UnboundParameter(name));
        }

        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        debug!(num_qubits, shots, "starting simulation");

        let mut sv = Statevector::new(num_qubits);
        for op in bound.ops() {
            sv.apply(op);
        }

        let probabilities = sv.probabilities();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sample_outcome(&probabilities, &mut rng);
            counts.insert(sv.outcome_to_bitstring(outcome), 1);
        }

        let elapsed = start.elapsed();
        debug!(?elapsed, distinct = counts.len(), "simulation complete");

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvasir_ir::{ParameterExpression, QubitId};

    fn bell() -> Circuit {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.measure_all().unwrap();
        circuit
    }

    #[test]
    fn test_bell_state_counts() {
        let evaluator = SimulatorEvaluator::new();
        let result = evaluator
            .evaluate(&bell(), &HashMap::new(), 1000, 123)
            .unwrap();

        assert_eq!(result.shots, 1000);
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[test]
    fn test_same_seed_same_counts() {
        let evaluator = SimulatorEvaluator::new();
        let a = evaluator
            .evaluate(&bell(), &HashMap::new(), 500, 42)
            .unwrap();
        let b = evaluator
            .evaluate(&bell(), &HashMap::new(), 500, 42)
            .unwrap();
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_parameter_binding() {
        // RX(π) flips the qubit deterministically.
        let mut circuit = Circuit::with_size("flip", 1, 1);
        circuit
            .rx(ParameterExpression::symbol("theta"), QubitId(0))
            .unwrap();
        circuit.measure_all().unwrap();

        let mut bindings = HashMap::new();
        bindings.insert("theta".to_string(), std::f64::consts::PI);

        let evaluator = SimulatorEvaluator::new();
        let result = evaluator.evaluate(&circuit, &bindings, 100, 0).unwrap();
        assert_eq!(result.counts.get("1"), 100);
    }

    #[test]
    fn test_unbound_parameter_rejected() {
        let mut circuit = Circuit::with_size("sym", 1, 1);
        circuit
            .rx(ParameterExpression::symbol("theta"), QubitId(0))
            .unwrap();
        circuit.measure_all().unwrap();

        let evaluator = SimulatorEvaluator::new();
        let err = evaluator
            .evaluate(&circuit, &HashMap::new(), 100, 0)
            .unwrap_err();
        assert!(matches!(err, EvalError::UnboundParameter(_)));
    }

    #[test]
    fn test_too_many_qubits() {
        let evaluator = SimulatorEvaluator::with_max_qubits(3);
        let circuit = Circuit::with_size("big", 5, 0);
        let err = evaluator
            .evaluate(&circuit, &HashMap::new(), 10, 0)
            .unwrap_err();
        assert!(matches!(err, EvalError::CircuitTooLarge(_)));
    }

    #[test]
    fn test_zero_shots_rejected() {
        let evaluator = SimulatorEvaluator::new();
        let err = evaluator
            .evaluate(&bell(), &HashMap::new(), 0, 0)
            .unwrap_err();
        assert!(matches!(err, EvalError::InvalidShots(_)));
    }
}
