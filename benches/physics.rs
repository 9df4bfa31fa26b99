//! Benchmarks for drapery cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drapery::*;

fn bench_rope_simulation(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_steps", |b| {
        b.iter(|| {
            let mut rope = Topology::chain(
                Vec3::new(0.0f32, 10.0, 0.0), Vec3::new(10.0, 10.0, 0.0), 50,
            );
            rope.pin(0);
            let mut sim = ClothSimulation::new(rope).unwrap();
            for _ in 0..60 {
                sim.apply_force(Vec3::new(0.0, -9.81, 0.0));
                sim.time_step(1.0 / 60.0);
            }
            sim.positions()
        });
    });
}

fn bench_sheet_simulation(c: &mut Criterion) {
    c.bench_function("sheet_20x20_60_steps", |b| {
        b.iter(|| {
            let config = GridConfig::new(20, 20, 1.0).with_shear().with_bend();
            let mut sheet = Topology::grid(Vec3::new(0.0f32, 25.0, 0.0), &config);
            sheet.pin(0).pin(19);
            let mut sim = ClothSimulation::with_config(
                sheet, SolverConfig::new().with_iterations(5),
            ).unwrap();
            for _ in 0..60 {
                sim.apply_force(Vec3::new(0.0, -9.81, 0.0));
                sim.time_step(0.001);
            }
            sim.positions()
        });
    });
}

criterion_group!(benches, bench_rope_simulation, bench_sheet_simulation);
criterion_main!(benches);
