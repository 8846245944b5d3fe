use crate::sim::FluidSim;

#[derive(Debug, Clone)]
pub struct FlowMetrics {
    pub total_kinetic_energy: f32,
    pub max_speed: f32,
    pub avg_speed: f32,
    pub mean_abs_divergence: f32,
    pub mean_abs_vorticity: f32,
    pub frame: usize,
}

impl FlowMetrics {
    pub fn analyze(sim: &FluidSim, frame: usize) -> Self {
        let width = sim.width();
        let height = sim.height();
        let vel = sim.velocity();

        let mut total_kinetic_energy: f32 = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut speed_sum: f32 = 0.0;
        let mut total_divergence: f32 = 0.0;
        let mut total_vorticity: f32 = 0.0;

        let interior = (width.saturating_sub(2) * height.saturating_sub(2)).max(1);

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let idx = y * width + x;
                let speed = vel[idx].length();

                total_kinetic_energy += 0.5 * speed * speed;
                max_speed = max_speed.max(speed);
                speed_sum += speed;

                // Central differences, matching the solver's discretization
                let divergence = 0.5 * (vel[idx + 1].x - vel[idx - 1].x)
                    + 0.5 * (vel[idx + width].y - vel[idx - width].y);
                total_divergence += divergence.abs();

                let vorticity = 0.5 * (vel[idx + 1].y - vel[idx - 1].y)
                    - 0.5 * (vel[idx + width].x - vel[idx - width].x);
                total_vorticity += vorticity.abs();
            }
        }

        Self {
            total_kinetic_energy,
            max_speed,
            avg_speed: speed_sum / interior as f32,
            mean_abs_divergence: total_divergence / interior as f32,
            mean_abs_vorticity: total_vorticity / interior as f32,
            frame,
        }
    }

    pub fn print_summary(&self) {
        println!("Frame {} Metrics:", self.frame);
        println!("  Kinetic Energy: {:.6}", self.total_kinetic_energy);
        println!("  Max Speed: {:.6}", self.max_speed);
        println!("  Avg Speed: {:.6}", self.avg_speed);
        println!("  Mean |Divergence|: {:.6}", self.mean_abs_divergence);
        println!("  Mean |Vorticity|: {:.6}", self.mean_abs_vorticity);
        println!();
    }
}

pub struct AnalysisRecorder {
    pub metrics_history: Vec<FlowMetrics>,
}

impl AnalysisRecorder {
    pub fn new() -> Self {
        Self {
            metrics_history: Vec::new(),
        }
    }

    pub fn record_frame(&mut self, sim: &FluidSim, frame: usize) {
        let metrics = FlowMetrics::analyze(sim, frame);
        self.metrics_history.push(metrics);
    }

    pub fn print_trends(&self) {
        if self.metrics_history.len() < 2 {
            return;
        }

        let first = &self.metrics_history[0];
        let last = &self.metrics_history[self.metrics_history.len() - 1];

        println!("=== TREND ANALYSIS ===");
        println!(
            "Kinetic Energy change: {:.6} -> {:.6} ({:+.3}%)",
            first.total_kinetic_energy,
            last.total_kinetic_energy,
            (last.total_kinetic_energy - first.total_kinetic_energy)
                / first.total_kinetic_energy.max(0.001)
                * 100.0
        );
        println!(
            "Mean |Divergence| change: {:.6} -> {:.6} ({:+.3}%)",
            first.mean_abs_divergence,
            last.mean_abs_divergence,
            (last.mean_abs_divergence - first.mean_abs_divergence)
                / first.mean_abs_divergence.max(0.001)
                * 100.0
        );
        println!(
            "Max Speed change: {:.6} -> {:.6} ({:+.3}%)",
            first.max_speed,
            last.max_speed,
            (last.max_speed - first.max_speed) / first.max_speed.max(0.001) * 100.0
        );
    }
}

impl Default for AnalysisRecorder {
    fn default() -> Self {
        Self::new()
    }
}
