use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flowsim::FluidSim;

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    // Test different grid sizes
    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut sim = FluidSim::new(size, size);

            // Add some initial state
            sim.inject_force(size / 2, size / 2, glam::Vec2::new(5.0, 0.0), 0.1);

            b.iter(|| {
                black_box(sim.step(0.016));
            });
        });
    }
    group.finish();
}

fn benchmark_full_scenario(c: &mut Criterion) {
    c.bench_function("full_100x100_20steps", |b| {
        b.iter(|| {
            let mut sim = FluidSim::new(100, 100);

            // Stir and run 20 frames
            sim.inject_force(50, 50, glam::Vec2::new(10.0, 0.0), 0.1);
            for _ in 0..20 {
                black_box(sim.step(0.016));
            }
        });
    });
}

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let size = 100;

    // Setup simulation with some state
    let mut sim = FluidSim::new(size, size);
    sim.inject_force(50, 50, glam::Vec2::new(10.0, 5.0), 0.1);

    // Run a few steps to get realistic state
    for _ in 0..5 {
        sim.step(0.016);
    }

    group.bench_function("diffuse_velocity", |b| {
        let mut sim = sim.clone();
        b.iter(|| {
            black_box(sim.diffuse_velocity());
        });
    });

    group.bench_function("project_velocity", |b| {
        let mut sim = sim.clone();
        b.iter(|| {
            black_box(sim.project_velocity());
        });
    });

    group.bench_function("advect_velocity", |b| {
        let mut sim = sim.clone();
        b.iter(|| {
            black_box(sim.advect_velocity(0.016));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_step,
    benchmark_full_scenario,
    benchmark_operations
);
criterion_main!(benches);
