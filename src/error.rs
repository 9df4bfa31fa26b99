//! Error types for simulation configuration.

use thiserror::Error;

/// Errors raised when a simulation is configured or reconfigured.
///
/// Stepping never fails; every precondition is checked up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Movable flags must match the number of particles.
    #[error("expected {expected} movable flags, found {found}")]
    MovableCountMismatch { expected: usize, found: usize },
    /// Constraint references a particle that does not exist.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// Constraint links a particle to itself.
    #[error("constraint links particle {index} to itself")]
    SelfLink { index: usize },
    /// Rest length must be finite and non-negative.
    #[error("constraint {constraint} has a negative or non-finite rest length")]
    InvalidRestLength { constraint: usize },
    /// Initial positions must be finite.
    #[error("particle {index} has a non-finite position")]
    NonFinitePosition { index: usize },
    /// A pinned particle can never be lifted back above the ground.
    #[error("pinned particle {index} starts below the ground plane")]
    PinnedBelowGround { index: usize },
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Ground height must be finite.
    #[error("ground height must be finite")]
    InvalidGroundHeight,
    /// Degenerate-link epsilon must be finite and non-negative.
    #[error("degenerate link epsilon must be finite and non-negative")]
    InvalidDegenerateEpsilon,
    /// At least one relaxation pass is required.
    #[error("relaxation needs at least one iteration")]
    InvalidIterations,
}
