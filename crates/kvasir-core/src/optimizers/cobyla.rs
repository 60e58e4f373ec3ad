//! Simplex-based trust-region minimizer.
//!
//! A Nelder-Mead style simplex search with a shrinking trust region,
//! standing in for COBYLA. Derivative-free, so it tolerates the sampling
//! noise of a shot-based objective.

use tracing::{debug, instrument};

use super::{OptimizationResult, Optimizer};
use crate::error::CoreResult;

/// Simplex optimizer configuration.
#[derive(Debug, Clone)]
pub struct Cobyla {
    /// Maximum number of iterations.
    pub maxiter: usize,
    /// Convergence tolerance on the simplex value spread.
    pub tol: f64,
    /// Initial trust region radius.
    pub rhobeg: f64,
    /// Final trust region radius.
    pub rhoend: f64,
}

impl Default for Cobyla {
    fn default() -> Self {
        Self {
            maxiter: 100,
            tol: 1e-6,
            rhobeg: 0.5,
            rhoend: 1e-4,
        }
    }
}

impl Cobyla {
    /// Create an optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set trust region radii.
    pub fn with_trust_region(mut self, rhobeg: f64, rhoend: f64) -> Self {
        self.rhobeg = rhobeg;
        self.rhoend = rhoend;
        self
    }
}

/// The working simplex: n+1 points with their objective values.
struct Simplex {
    points: Vec<Vec<f64>>,
    values: Vec<f64>,
}

impl Simplex {
    fn around<F>(center: &[f64], radius: f64, objective: &mut F, evals: &mut usize) -> CoreResult<Self>
    where
        F: FnMut(&[f64]) -> CoreResult<f64>,
    {
        let mut points = vec![center.to_vec()];
        let mut values = vec![objective(center)?];
        *evals += 1;
        for i in 0..center.len() {
            let mut point = center.to_vec();
            point[i] += radius;
            values.push(objective(&point)?);
            *evals += 1;
            points.push(point);
        }
        Ok(Self { points, values })
    }

    /// Indices sorted by ascending objective value.
    fn ranking(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.values.len()).collect();
        indices.sort_by(|&a, &b| self.values[a].total_cmp(&self.values[b]));
        indices
    }

    fn best(&self) -> (usize, f64) {
        let mut best = 0;
        for i in 1..self.values.len() {
            if self.values[i] < self.values[best] {
                best = i;
            }
        }
        (best, self.values[best])
    }
}

impl Optimizer for Cobyla {
    fn name(&self) -> &str {
        "cobyla"
    }

    #[instrument(skip(self, objective, initial_params), fields(maxiter = self.maxiter))]
    fn minimize<F>(
        &self,
        mut objective: F,
        initial_params: Vec<f64>,
    ) -> CoreResult<OptimizationResult>
    where
        F: FnMut(&[f64]) -> CoreResult<f64>,
    {
        let n = initial_params.len();
        let mut evals = 0;
        let mut simplex = Simplex::around(&initial_params, self.rhobeg, &mut objective, &mut evals)?;

        let mut best_seen = simplex.best().1;
        let mut history = vec![best_seen];
        let mut rho = self.rhobeg;
        let mut converged = false;
        let mut iterations = 0;

        for iteration in 0..self.maxiter {
            iterations = iteration + 1;
            let ranking = simplex.ranking();
            let best_idx = ranking[0];
            let worst_idx = ranking[n];

            let spread = simplex.values[worst_idx] - simplex.values[best_idx];
            if spread < self.tol {
                if rho <= self.rhoend {
                    converged = true;
                    break;
                }
                // Shrink the trust region and restart around the best point.
                rho = (rho * 0.5).max(self.rhoend);
                let center = simplex.points[best_idx].clone();
                simplex = Simplex::around(&center, rho, &mut objective, &mut evals)?;
                continue;
            }

            // Centroid of every point except the worst.
            let mut centroid = vec![0.0; n];
            for &idx in &ranking[..n] {
                for (c, x) in centroid.iter_mut().zip(&simplex.points[idx]) {
                    *c += x;
                }
            }
            for c in &mut centroid {
                *c /= n as f64;
            }

            // Reflect the worst point through the centroid, stepping at
            // most rho per coordinate.
            let mut reflected: Vec<f64> = centroid
                .iter()
                .zip(&simplex.points[worst_idx])
                .map(|(c, w)| 2.0 * c - w)
                .collect();
            for (r, c) in reflected.iter_mut().zip(&centroid) {
                let diff = *r - c;
                if diff.abs() > rho {
                    *r = c + rho * diff.signum();
                }
            }
            let f_reflected = objective(&reflected)?;
            evals += 1;

            if f_reflected < simplex.values[best_idx] {
                // Try to expand further along the same direction.
                let expanded: Vec<f64> = centroid
                    .iter()
                    .zip(&reflected)
                    .map(|(c, r)| c + 2.0 * (r - c))
                    .collect();
                let f_expanded = objective(&expanded)?;
                evals += 1;

                if f_expanded < f_reflected {
                    simplex.points[worst_idx] = expanded;
                    simplex.values[worst_idx] = f_expanded;
                } else {
                    simplex.points[worst_idx] = reflected;
                    simplex.values[worst_idx] = f_reflected;
                }
            } else if f_reflected < simplex.values[ranking[n - 1]] {
                simplex.points[worst_idx] = reflected;
                simplex.values[worst_idx] = f_reflected;
            } else {
                // Contract toward the centroid.
                let contracted: Vec<f64> = centroid
                    .iter()
                    .zip(&simplex.points[worst_idx])
                    .map(|(c, w)| 0.5 * (c + w))
                    .collect();
                let f_contracted = objective(&contracted)?;
                evals += 1;

                if f_contracted < simplex.values[worst_idx] {
                    simplex.points[worst_idx] = contracted;
                    simplex.values[worst_idx] = f_contracted;
                } else {
                    // Shrink everything toward the best point.
                    let best = simplex.points[best_idx].clone();
                    for i in 0..=n {
                        if i == best_idx {
                            continue;
                        }
                        for (x, b) in simplex.points[i].iter_mut().zip(&best) {
                            *x = 0.5 * (b + *x);
                        }
                        simplex.values[i] = objective(&simplex.points[i])?;
                        evals += 1;
                    }
                }
            }

            let (_, current_best) = simplex.best();
            if current_best < best_seen {
                best_seen = current_best;
                history.push(best_seen);
            }
        }

        let (best_idx, optimal_value) = simplex.best();
        debug!(optimal_value, evals, converged, "simplex search finished");

        Ok(OptimizationResult {
            optimal_params: simplex.points[best_idx].clone(),
            optimal_value,
            num_evaluations: evals,
            num_iterations: iterations,
            history,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_bowl() {
        let cobyla = Cobyla::new().with_maxiter(200);

        // Minimize (x-1)^2 + (y-2)^2.
        let result = cobyla
            .minimize(
                |p| Ok((p[0] - 1.0).powi(2) + (p[1] - 2.0).powi(2)),
                vec![0.0, 0.0],
            )
            .unwrap();

        assert!(result.optimal_value < 0.01);
        assert!((result.optimal_params[0] - 1.0).abs() < 0.1);
        assert!((result.optimal_params[1] - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_rosenbrock_improves() {
        let cobyla = Cobyla::new().with_maxiter(500);

        let result = cobyla
            .minimize(
                |p| Ok((1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0].powi(2)).powi(2)),
                vec![0.0, 0.0],
            )
            .unwrap();

        // Rosenbrock is hard; just require substantial progress.
        assert!(result.optimal_value < 1.0);
    }

    #[test]
    fn test_objective_error_aborts() {
        let cobyla = Cobyla::new().with_maxiter(50);
        let mut calls = 0;

        let result = cobyla.minimize(
            |p| {
                calls += 1;
                if calls > 3 {
                    Err(crate::error::QaoaError::EmptyCounts)
                } else {
                    Ok(p[0].powi(2))
                }
            },
            vec![1.0, 1.0],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_history_is_monotone() {
        let cobyla = Cobyla::new().with_maxiter(100);
        let result = cobyla
            .minimize(|p| Ok(p[0].powi(2) + p[1].powi(2)), vec![2.0, -3.0])
            .unwrap();

        for pair in result.history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }
}
