//! Core velocity solver library for flowsim

pub mod advect;
pub mod analysis;
pub mod backend;
pub mod boundary;
pub mod diffuse;
pub mod forces;
pub mod grid;
pub mod params;
pub mod project;
pub mod sim;

use glam::Vec2;

// Unified solver interface consumed by the embedding application
pub trait FlowSolver {
    fn step(&mut self, dt: f32);
    fn inject_force(&mut self, x: usize, y: usize, delta: Vec2, dt: f32);
    fn width(&self) -> usize;
    fn height(&self) -> usize;
}

pub use advect::Sampling;
pub use analysis::{AnalysisRecorder, FlowMetrics};
pub use backend::{Backend, DEFAULT_BACKEND};
pub use grid::{Field, ScalarField, VectorField};
pub use params::SolverParams;
pub use sim::FluidSim;
