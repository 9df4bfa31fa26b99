use drapery::{ClothSimulation, GridConfig, Topology, Vec3};

#[test]
fn sheet_pinned_at_corners_sags() {
    let config = GridConfig::new(7, 7, 1.0).with_shear().with_bend();
    let mut sheet = Topology::grid(Vec3::new(-3.0, 10.0, 0.0), &config);
    sheet.pin(0).pin(6);

    let mut sim = ClothSimulation::new(sheet).unwrap();
    let left = sim.positions()[0];
    let right = sim.positions()[6];

    for _ in 0..200 {
        sim.apply_force(Vec3::new(0.0, -9.81, 0.0));
        sim.time_step(0.001);
    }

    let p = sim.positions();
    assert_eq!(p[0], left);
    assert_eq!(p[6], right);

    // bottom-centre particle (col 3, row 6) started at y = 4
    let bottom_centre = p[6 * 7 + 3];
    assert!(bottom_centre.y < 4.0, "bottom centre should sag, y = {}", bottom_centre.y);
    assert!(p.iter().all(|q| q.y >= 0.0 && q.is_finite()));
}
