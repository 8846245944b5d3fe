use glam::Vec2;

use crate::FlowSolver;
use crate::advect;
use crate::backend::{Backend, DEFAULT_BACKEND};
use crate::boundary;
use crate::diffuse;
use crate::forces;
use crate::grid::{ScalarField, VectorField};
use crate::params::SolverParams;
use crate::project;

/// An owned simulation instance. Fields are allocated once at construction
/// with fixed dimensions and mutated in place every frame; any number of
/// independent instances may coexist.
#[derive(Debug, Clone)]
pub struct FluidSim {
    width: usize,
    height: usize,
    velocity: VectorField,
    pressure: ScalarField,
    divergence: Vec<f32>,
    params: SolverParams,
    backend: Backend,
}

impl FluidSim {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_params(width, height, SolverParams::default())
    }

    pub fn with_params(width: usize, height: usize, params: SolverParams) -> Self {
        assert!(
            width > 0 && height > 0,
            "simulation dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            velocity: VectorField::new(width, height),
            pressure: ScalarField::new(width, height),
            divergence: vec![0.0; width * height],
            params,
            backend: DEFAULT_BACKEND,
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SolverParams {
        &mut self.params
    }

    /// Advances the simulation one frame: boundary, diffusion, projection
    /// (divergence, pressure solve, gradient subtraction), advection,
    /// boundary. Always synchronous, always to completion. `dt` is the
    /// caller's frame time; stability under large `dt` is the caller's
    /// responsibility.
    pub fn step(&mut self, dt: f32) {
        assert!(dt > 0.0, "step requires dt > 0, got {dt}");
        boundary::no_slip(self.velocity.current_mut(), self.width, self.height);
        self.diffuse_velocity();
        self.project_velocity();
        self.advect_velocity(dt);
        boundary::no_slip(self.velocity.current_mut(), self.width, self.height);
    }

    /// Applies a drag impulse with the configured radius and strength.
    /// Mutates the velocity field immediately; may be called any number of
    /// times between steps.
    pub fn inject_force(&mut self, x: usize, y: usize, delta: Vec2, dt: f32) {
        self.inject_force_with(
            x,
            y,
            delta,
            dt,
            self.params.force_radius,
            self.params.force_strength,
        );
    }

    pub fn inject_force_with(
        &mut self,
        x: usize,
        y: usize,
        delta: Vec2,
        dt: f32,
        radius: f32,
        strength: f32,
    ) {
        forces::inject_impulse(
            self.velocity.current_mut(),
            self.width,
            self.height,
            x,
            y,
            delta,
            dt,
            radius,
            strength,
        );
    }

    pub fn diffuse_velocity(&mut self) {
        diffuse::diffuse(
            &mut self.velocity,
            self.params.diffusion,
            self.params.diffusion_iterations,
            self.backend,
        );
    }

    pub fn project_velocity(&mut self) {
        project::compute_divergence(
            self.velocity.current(),
            &mut self.divergence,
            self.width,
            self.height,
            self.backend,
        );
        project::solve_pressure(
            &mut self.pressure,
            &self.divergence,
            self.params.pressure_iterations,
            self.backend,
        );
        project::subtract_pressure_gradient(
            self.velocity.current_mut(),
            self.pressure.current(),
            self.width,
            self.height,
            self.backend,
        );
    }

    pub fn advect_velocity(&mut self, dt: f32) {
        advect::advect(
            &mut self.velocity,
            dt,
            self.params.damping,
            self.params.sampling,
            self.backend,
        );
    }

    /// Read-only borrow of the live velocity buffer, row-major.
    pub fn velocity(&self) -> &[Vec2] {
        self.velocity.current()
    }

    /// Flat copy of the velocity grid.
    pub fn velocity_field(&self) -> Vec<Vec2> {
        self.velocity.snapshot()
    }

    /// Overwrites the velocity field from a full W×H grid, e.g. after a
    /// round trip through an external compute backend.
    pub fn set_velocity_field(&mut self, grid: &[Vec2]) {
        self.velocity.load(grid);
    }

    /// Flat copy of the pressure grid.
    pub fn pressure_field(&self) -> Vec<f32> {
        self.pressure.snapshot()
    }

    /// Overwrites the pressure field from a flat scalar array, for hybrid
    /// pipelines where pressure is solved externally.
    pub fn set_pressure_field(&mut self, flat: &[f32], width: usize, height: usize) {
        assert!(
            width == self.width && height == self.height,
            "pressure grid {width}x{height} does not match simulation {}x{}",
            self.width,
            self.height
        );
        self.pressure.load(flat);
    }

    /// Last computed divergence buffer. Border cells are not recomputed and
    /// hold their previous values.
    pub fn divergence(&self) -> &[f32] {
        &self.divergence
    }
}

impl FlowSolver for FluidSim {
    fn step(&mut self, dt: f32) {
        self.step(dt)
    }

    fn inject_force(&mut self, x: usize, y: usize, delta: Vec2, dt: f32) {
        self.inject_force(x, y, delta, dt)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}
