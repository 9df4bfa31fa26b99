#![cfg(feature = "serde")]

use drapery::{ClothSimulation, SolverConfig, Topology, Vec3};

#[test]
fn partial_config_uses_defaults() {
    let config: SolverConfig<f32> = serde_json::from_str(r#"{ "iterations": 8 }"#).unwrap();
    assert_eq!(config.iterations, 8);
    assert_eq!(config.mass, 1.0);
    assert_eq!(config.ground_height, 0.0);
}

#[test]
fn topology_loads_from_json() {
    let json = r#"{
        "positions": [{ "x": 0.0, "y": 3.0, "z": 0.0 }, { "x": 1.0, "y": 4.0, "z": 1.0 }],
        "constraints": [{ "a": 0, "b": 1, "rest_length": 1.7320508 }],
        "movable": [true, false]
    }"#;
    let topology: Topology<f32> = serde_json::from_str(json).unwrap();
    let sim = ClothSimulation::new(topology).unwrap();
    assert_eq!(sim.particle_count(), 2);
    assert!(!sim.particles().is_movable(1));
    assert_eq!(sim.positions()[1], Vec3::new(1.0, 4.0, 1.0));
}
