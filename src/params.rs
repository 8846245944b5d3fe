use serde::{Deserialize, Serialize};

use crate::advect::Sampling;

/// Tunable solver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Diffusion coefficient `k` in `(1 + k) * v_new = v0 + (k/4) * sum`.
    pub diffusion: f32,
    /// Jacobi sweeps for the diffusion solve.
    pub diffusion_iterations: usize,
    /// Jacobi sweeps for the pressure Poisson solve.
    pub pressure_iterations: usize,
    /// Energy dissipation applied to every advected sample.
    pub damping: f32,
    /// Euclidean radius of the force splat, in cells.
    pub force_radius: f32,
    /// Multiplier on injected drag velocity.
    pub force_strength: f32,
    pub sampling: Sampling,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            diffusion: 0.8,
            diffusion_iterations: 40,
            pressure_iterations: 50,
            damping: 0.98,
            force_radius: 1.0,
            force_strength: 2.0,
            sampling: Sampling::Bilinear,
        }
    }
}
