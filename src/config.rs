//! Configuration types for the cloth solver.

use crate::error::SimulationError;
use crate::float::Float;

/// Number of relaxation passes run per time step unless configured otherwise.
pub const DEFAULT_ITERATIONS: usize = 5;

/// Configuration for the constraint solver and integrator.
///
/// # Builder Pattern
/// ```
/// use drapery::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(8)
///     .with_mass(2.0)
///     .with_ground_height(-1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<F: Float> {
    /// Gauss-Seidel passes over the link list per step. Default: 5.
    pub iterations: usize,
    /// Uniform particle mass used by the Verlet force term. Default: 1.0.
    pub mass: F,
    /// Height of the ground plane along y. Default: 0.0.
    pub ground_height: F,
    /// Links shorter than this are skipped instead of divided by. Default: 1e-10.
    pub degenerate_epsilon: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: DEFAULT_ITERATIONS,
            mass: F::one(),
            ground_height: F::zero(),
            degenerate_epsilon: F::from_f32(1e-10),
        }
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the uniform particle mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the ground plane height.
    pub fn with_ground_height(mut self, height: F) -> Self {
        self.ground_height = height;
        self
    }

    /// Set the length below which a link is treated as degenerate.
    pub fn with_degenerate_epsilon(mut self, epsilon: F) -> Self {
        self.degenerate_epsilon = epsilon.abs();
        self
    }

    /// Check the config before a simulation is built with it.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.iterations == 0 {
            return Err(SimulationError::InvalidIterations);
        }
        if !self.mass.is_finite() || self.mass <= F::zero() {
            return Err(SimulationError::InvalidMass);
        }
        if !self.ground_height.is_finite() {
            return Err(SimulationError::InvalidGroundHeight);
        }
        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon < F::zero() {
            return Err(SimulationError::InvalidDegenerateEpsilon);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_solver() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert_eq!(config.iterations, 5);
        assert_eq!(config.mass, 1.0);
        assert_eq!(config.ground_height, 0.0);
    }

    #[test]
    fn rejects_zero_iterations() {
        let config: SolverConfig<f64> = SolverConfig::new().with_iterations(0);
        assert_eq!(config.validate(), Err(SimulationError::InvalidIterations));
    }

    #[test]
    fn rejects_bad_mass() {
        let config: SolverConfig<f32> = SolverConfig::new().with_mass(0.0);
        assert_eq!(config.validate(), Err(SimulationError::InvalidMass));
        let config: SolverConfig<f32> = SolverConfig::new().with_mass(f32::NAN);
        assert_eq!(config.validate(), Err(SimulationError::InvalidMass));
    }

    #[test]
    fn rejects_non_finite_ground() {
        let config: SolverConfig<f32> = SolverConfig::new().with_ground_height(f32::NAN);
        assert_eq!(config.validate(), Err(SimulationError::InvalidGroundHeight));
        let config: SolverConfig<f64> = SolverConfig::new().with_ground_height(f64::NEG_INFINITY);
        assert_eq!(config.validate(), Err(SimulationError::InvalidGroundHeight));
    }

    #[test]
    fn rejects_bad_degenerate_epsilon() {
        let mut config: SolverConfig<f32> = SolverConfig::new();
        config.degenerate_epsilon = -1.0;
        assert_eq!(config.validate(), Err(SimulationError::InvalidDegenerateEpsilon));
        config.degenerate_epsilon = f32::NAN;
        assert_eq!(config.validate(), Err(SimulationError::InvalidDegenerateEpsilon));
        config.degenerate_epsilon = 0.0;
        assert!(config.validate().is_ok());
    }
}
