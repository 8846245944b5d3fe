use flowsim::{AnalysisRecorder, FlowMetrics, FluidSim, SolverParams};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let params: SolverParams = if args.len() > 1 {
        // Optional JSON params file
        let text = std::fs::read_to_string(&args[1])?;
        serde_json::from_str(&text)?
    } else {
        SolverParams::default()
    };

    run_headless(params)
}

fn run_headless(params: SolverParams) -> Result<(), Box<dyn std::error::Error>> {
    println!("Running headless flow solver with quantitative analysis...");
    info!("params: {params:?}");

    let mut sim = FluidSim::with_params(200, 200, params);
    let mut recorder = AnalysisRecorder::new();

    // Stir the field with a horizontal drag across the middle, the way a
    // pointer sweep from the embedding application would
    println!("Seeding a horizontal drag impulse...");
    let dt = 1.0 / 60.0;
    for i in 0..40 {
        sim.inject_force(80 + i, 100, glam::Vec2::new(0.05, 0.0), dt);
    }

    recorder.record_frame(&sim, 0);
    let initial_metrics = FlowMetrics::analyze(&sim, 0);
    initial_metrics.print_summary();

    for frame in 1..=20 {
        sim.step(dt);
        recorder.record_frame(&sim, frame);

        if frame % 5 == 0 {
            let metrics = FlowMetrics::analyze(&sim, frame);
            metrics.print_summary();
        }

        if frame <= 3 {
            println!("Frame {frame} velocity visualization:");
            debug_visualize_velocity(&sim);
        }
    }

    recorder.print_trends();

    println!("Completed 20 frames.");
    Ok(())
}

fn debug_visualize_velocity(sim: &FluidSim) {
    let width = sim.width();
    let height = sim.height();
    let vel = sim.velocity();

    // Show a band around the seeded drag to see horizontal movement
    for y in 95..105 {
        if y < height {
            for x in 70..130 {
                if x < width {
                    let speed = vel[y * width + x].length();
                    if speed > 0.5 {
                        print!("→→");
                    } else if speed > 0.1 {
                        print!("→");
                    } else if speed > 0.01 {
                        print!(".");
                    } else {
                        print!("  ");
                    }
                }
            }
            println!();
        }
    }
    println!();
}
