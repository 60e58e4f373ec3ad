//! End-to-end pipeline tests against the local simulator.

use std::sync::Arc;

use kvasir_adapter_sim::SimulatorEvaluator;
use kvasir_core::optimizers::{Cobyla, Optimizer, Spsa};
use kvasir_core::problems::{Graph, Qubo};
use kvasir_core::{ExpectationEstimator, IsingModel, QaoaAnsatz, QaoaError, QaoaRunner};

fn simulator() -> Arc<SimulatorEvaluator> {
    Arc::new(SimulatorEvaluator::new())
}

#[test]
fn square_graph_beats_random_guessing() {
    let graph = Graph::square_4();
    let runner = QaoaRunner::new(simulator())
        .with_layers(2)
        .with_shots(1024)
        .with_seed(123);

    let result = runner
        .run(&graph, &Cobyla::new().with_maxiter(80).with_tol(1e-3))
        .unwrap();

    // Uniform sampling averages a cut of 2 on the square; the optimized
    // distribution must do clearly better.
    assert!(result.optimal_value < -2.5, "value = {}", result.optimal_value);
    assert!(result.best_cut >= 3, "best_cut = {}", result.best_cut);
    assert_eq!(result.best_bitstring.len(), 4);
    assert_eq!(result.counts.total(), 1024);
}

#[test]
fn ring_graph_with_spsa() {
    let graph = Graph::ring_6();
    let runner = QaoaRunner::new(simulator())
        .with_layers(1)
        .with_shots(1024)
        .with_seed(5)
        .with_initial_point(vec![0.3, 0.6]);

    let result = runner
        .run(&graph, &Spsa::new().with_maxiter(60).with_seed(5))
        .unwrap();

    // Max cut of the 6-ring is 6; uniform average is 3.
    assert!(result.best_cut >= 4, "best_cut = {}", result.best_cut);
    assert!(result.approximation_ratio(&graph) >= 4.0 / 6.0);
}

#[test]
fn single_qubit_reaches_analytic_optimum() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    // For H = [[-1]] the landscape is P(1) = (1 + sin(2β)sin(γ))/2 and the
    // minimum expectation is exactly -1 at β = π/4, γ = π/2.
    let qubo = Qubo::new(ndarray::array![[-1.0]]);
    let ising = IsingModel::from_qubo(&qubo);
    let ansatz = QaoaAnsatz::build(&ising, 1).unwrap();
    let estimator = ExpectationEstimator::new(simulator(), 1024, 123).unwrap();

    let result = Cobyla::new()
        .with_maxiter(100)
        .with_tol(1e-4)
        .minimize(
            |theta| estimator.estimate(&ansatz, &ising, theta),
            vec![FRAC_PI_4 - 0.3, FRAC_PI_2 - 0.3],
        )
        .unwrap();

    assert!(result.optimal_value < -0.95, "value = {}", result.optimal_value);
}

#[test]
fn objective_is_deterministic_per_seed() {
    let graph = Graph::ring_6();
    let ising = IsingModel::from_qubo(&Qubo::from_maxcut(&graph));
    let ansatz = QaoaAnsatz::build(&ising, 1).unwrap();
    let estimator = ExpectationEstimator::new(simulator(), 2048, 99).unwrap();

    let theta = [0.4, 0.8];
    let a = estimator.estimate(&ansatz, &ising, &theta).unwrap();
    let b = estimator.estimate(&ansatz, &ising, &theta).unwrap();
    assert_eq!(a, b);
}

#[test]
fn evaluator_failure_surfaces_through_runner() {
    // Cap the simulator below the problem size so every evaluation fails.
    let tiny = Arc::new(SimulatorEvaluator::with_max_qubits(2));
    let graph = Graph::square_4();
    let result = QaoaRunner::new(tiny).run(&graph, &Cobyla::new().with_maxiter(10));

    assert!(matches!(result, Err(QaoaError::Eval(_))));
}

#[test]
fn edgeless_graph_runs_without_interactions() {
    let graph = Graph::new(3, vec![]);
    let result = QaoaRunner::new(simulator())
        .with_shots(256)
        .run(&graph, &Cobyla::new().with_maxiter(10))
        .unwrap();

    // Nothing to cut; every bitstring scores zero.
    assert_eq!(result.best_cut, 0);
    assert!(result.optimal_value.abs() < 1e-12);
}
