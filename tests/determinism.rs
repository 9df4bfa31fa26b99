use drapery::{ClothSimulation, GridConfig, Topology, Vec3};

fn run_sheet(steps: usize) -> Vec<Vec3<f32>> {
    let config = GridConfig::new(7, 7, 1.0).with_shear();
    let mut sheet = Topology::grid(Vec3::new(-3.0, 10.0, 0.0), &config);
    sheet.pin(0).pin(6);
    let mut sim = ClothSimulation::new(sheet).unwrap();
    for i in 0..steps {
        sim.apply_force(Vec3::new(0.0, -9.81, 0.0));
        // deterministic stand-in for wind
        let t = i as f32 * 0.37;
        sim.apply_force(Vec3::new(t % 10.0, (t * 2.0) % 10.0, (t * 3.0) % 10.0));
        sim.time_step(0.001);
    }
    sim.positions()
}

#[test]
fn sheet_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run_sheet(200)).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }
}

#[test]
fn full_table_deterministic() {
    let build = || {
        let mut rope = Topology::chain(Vec3::new(0.0f64, 6.0, 0.0), Vec3::new(4.0, 6.0, 4.0), 8);
        rope.pin(0);
        let mut sim = ClothSimulation::new(rope).unwrap();
        for step in 0..120 {
            sim.apply_force(Vec3::new(0.0, -9.81, 0.0));
            sim.time_step(0.0005 * (1 + step % 3) as f64);
        }
        sim
    };
    let a = build();
    let b = build();
    assert_eq!(a.particles(), b.particles());
}
