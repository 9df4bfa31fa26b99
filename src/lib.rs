//! Verlet cloth and rope simulation with iterative distance constraints.
//!
//! `drapery` advances a mesh of point masses joined by inextensible links.
//! Each time step folds pending forces into positions, Verlet-integrates the
//! movable particles, then relaxes every link a fixed number of times in
//! insertion order, clamping particles above a ground plane after each pass.
//!
//! # Features
//!
//! - **Deterministic**: fixed iteration count, fixed link order, no randomness
//! - **Pinned particles**: never moved by forces, integration or links
//! - **Topology builders**: ropes and hanging sheets from plain distance links
//! - **Observable**: monitor each stage via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//! - **`serde`** (optional): serialize configs and topologies

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod topology;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::ParticleTable;
pub use constraint::{LinkConstraint, LinkOutcome};
pub use topology::{Topology, GridConfig};
pub use simulation::ClothSimulation;
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimulationError;
