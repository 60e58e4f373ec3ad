//! QAOA Max-Cut runner.

mod output;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use kvasir_adapter_sim::SimulatorEvaluator;
use kvasir_core::optimizers::{Cobyla, Optimizer, Spsa};
use kvasir_core::problems::Graph;
use kvasir_core::{QaoaResult, QaoaRunner};

use output::{print_header, print_result, print_section, print_success, spinner};

#[derive(Parser, Debug)]
#[command(name = "kvasir")]
#[command(about = "Solve Max-Cut instances with QAOA on a local simulator")]
struct Args {
    /// Fixed graph to solve (overrides --nodes/--density)
    #[arg(short, long, value_enum)]
    graph: Option<NamedGraph>,

    /// Number of nodes for a random graph
    #[arg(short, long, default_value_t = 6)]
    nodes: usize,

    /// Edge density for a random graph, in [0, 1]
    #[arg(short, long, default_value_t = 0.5)]
    density: f64,

    /// Number of QAOA layers
    #[arg(short = 'p', long, default_value_t = 2)]
    layers: usize,

    /// Measurement shots per expectation estimate
    #[arg(short, long, default_value_t = 1024)]
    shots: u32,

    /// Maximum optimizer iterations
    #[arg(short, long, default_value_t = 100)]
    maxiter: usize,

    /// Seed for graph generation and sampling
    #[arg(long, env = "KVASIR_SEED", default_value_t = 123)]
    seed: u64,

    /// Classical optimizer
    #[arg(short, long, value_enum, default_value = "cobyla")]
    optimizer: OptimizerKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NamedGraph {
    Square4,
    Ring6,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OptimizerKind {
    Cobyla,
    Spsa,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let graph = match args.graph {
        Some(NamedGraph::Square4) => Graph::square_4(),
        Some(NamedGraph::Ring6) => Graph::ring_6(),
        None => {
            if args.nodes < 2 {
                bail!("random graphs need at least 2 nodes");
            }
            Graph::random_with_density(args.nodes, args.density, args.seed)
                .context("failed to generate graph")?
        }
    };

    print_header("QAOA Max-Cut");

    print_section("Problem");
    print!("{graph}");
    print_result("Layers (p)", args.layers);
    print_result("Shots", args.shots);
    print_result("Max iterations", args.maxiter);
    print_result("Seed", args.seed);

    let runner = QaoaRunner::new(Arc::new(SimulatorEvaluator::new()))
        .with_layers(args.layers)
        .with_shots(args.shots)
        .with_seed(args.seed);

    let pb = spinner("Optimizing...");
    let result = match args.optimizer {
        OptimizerKind::Cobyla => {
            let opt = Cobyla::new().with_maxiter(args.maxiter).with_tol(1e-4);
            run(&runner, &graph, &opt)?
        }
        OptimizerKind::Spsa => {
            let opt = Spsa::new().with_maxiter(args.maxiter).with_seed(args.seed);
            run(&runner, &graph, &opt)?
        }
    };
    pb.finish_and_clear();

    print_section("Results");
    print_result("Best bitstring", &result.best_bitstring);
    print_result("Best cut", result.best_cut);
    print_result("Expectation at optimum", format!("{:.4}", result.optimal_value));
    print_result("Iterations", result.iterations);
    print_result("Circuit evaluations", result.circuit_evaluations);
    print_result("Converged", result.converged);

    let (betas, gammas) = result.optimal_params.split_at(args.layers);
    print_result("Optimal β", format!("{betas:.4?}"));
    print_result("Optimal γ", format!("{gammas:.4?}"));

    // Exact comparison stays feasible up to ~20 nodes.
    if graph.n_nodes <= 20 {
        let (_, max_cut) = graph.max_cut_brute_force();
        print_result("Optimal cut (exact)", max_cut);
        print_result(
            "Approximation ratio",
            format!("{:.1}%", result.approximation_ratio(&graph) * 100.0),
        );
    }

    println!();
    print_success("Done");
    Ok(())
}

fn run(runner: &QaoaRunner, graph: &Graph, optimizer: &impl Optimizer) -> Result<QaoaResult> {
    runner
        .run(graph, optimizer)
        .context("QAOA run failed")
}
