//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use kvasir_ir::{Instruction, InstructionKind, StandardGate};

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Apply an instruction to the statevector.
    ///
    /// Callers must have bound all parameters; symbolic angles are a
    /// contract violation checked before simulation starts.
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.0 as usize).collect();
                self.apply_gate(gate, &qubits);
            }
            InstructionKind::Measure | InstructionKind::Barrier => {
                // No effect on the statevector; sampling happens at the end.
            }
        }
    }

    fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Rx(theta) => {
                if let Some(t) = theta.as_f64() {
                    self.apply_rx(qubits[0], t);
                }
            }
            StandardGate::Ry(theta) => {
                if let Some(t) = theta.as_f64() {
                    self.apply_ry(qubits[0], t);
                }
            }
            StandardGate::Rz(theta) => {
                if let Some(t) = theta.as_f64() {
                    self.apply_rz(qubits[0], t);
                }
            }
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            StandardGate::RZZ(theta) => {
                if let Some(t) = theta.as_f64() {
                    self.apply_rzz(qubits[0], qubits[1], t);
                }
            }
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_rzz(&mut self, q1: usize, q2: usize, theta: f64) {
        // exp(-i θ/2 Z⊗Z): equal bits get e^{-iθ/2}, unequal bits e^{+iθ/2}.
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        let phase_eq = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_ne = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 == b2 {
                self.amplitudes[i] *= phase_eq;
            } else {
                self.amplitudes[i] *= phase_ne;
            }
        }
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Measurement probabilities for all 2^n basis states.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Convert a measurement outcome to a bitstring.
    ///
    /// Character `k` (from the left) is the measured value of qubit `k`.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        (0..self.num_qubits)
            .map(|q| if (outcome >> q) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

/// Sample a basis-state index from a probability vector.
pub fn sample_outcome(probabilities: &[f64], rng: &mut impl Rng) -> usize {
    let r: f64 = rng.gen_range(0.0..1.0);

    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return i;
        }
    }

    // Fallback for rounding at the top of the cumulative sum.
    probabilities.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        for amp in &sv.amplitudes[1..] {
            assert!(approx_eq(*amp, Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_cx(0, 1);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_rzz_phases() {
        // On |++⟩, RZZ(θ) phases equal-bit components by e^{-iθ/2} and
        // unequal-bit components by e^{+iθ/2}.
        let theta = 0.8;
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_h(1);
        sv.apply_rzz(0, 1, theta);

        let eq = Complex64::from_polar(0.5, -theta / 2.0);
        let ne = Complex64::from_polar(0.5, theta / 2.0);
        assert!(approx_eq(sv.amplitudes[0], eq));
        assert!(approx_eq(sv.amplitudes[1], ne));
        assert!(approx_eq(sv.amplitudes[2], ne));
        assert!(approx_eq(sv.amplitudes[3], eq));
    }

    #[test]
    fn test_probabilities_normalized() {
        let mut sv = Statevector::new(3);
        sv.apply_h(0);
        sv.apply_cx(0, 1);
        sv.apply_rx(2, 0.3);

        let total: f64 = sv.probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sample_deterministic_state() {
        // |1⟩ always samples to 1 regardless of the generator.
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        let probs = sv.probabilities();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sample_outcome(&probs, &mut rng), 1);
        }
    }

    #[test]
    fn test_outcome_to_bitstring() {
        let sv = Statevector::new(3);
        // Outcome 0b011 means qubits 0 and 1 measured 1, qubit 2 measured 0.
        assert_eq!(sv.outcome_to_bitstring(0b011), "110");
        assert_eq!(sv.outcome_to_bitstring(0), "000");
        assert_eq!(sv.outcome_to_bitstring(0b100), "001");
    }
}
