//! Problem definitions and encodings.

pub mod graph;
pub mod qubo;

pub use graph::Graph;
pub use qubo::Qubo;
