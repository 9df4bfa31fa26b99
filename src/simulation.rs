//! Cloth simulation: owns the particle and link tables and runs time steps.

use crate::config::SolverConfig;
use crate::constraint::{LinkConstraint, LinkOutcome};
use crate::error::SimulationError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::ParticleTable;
use crate::topology::Topology;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use tracing::{debug, trace, warn};

/// A position-based cloth/rope simulation.
///
/// Each [`time_step`](Self::time_step) runs force accumulation, Verlet
/// integration and a fixed number of relaxation passes, in that order.
/// Readers get immutable views; the only way to change the particle table
/// from outside is through forces, steps and wholesale reconfiguration.
///
/// ```
/// use drapery::{ClothSimulation, Topology, Vec3};
///
/// let mut rope = Topology::chain(Vec3::new(0.0f32, 5.0, 0.0), Vec3::new(4.0, 5.0, 0.0), 4);
/// rope.pin(0);
/// let mut sim = ClothSimulation::new(rope).unwrap();
/// for _ in 0..10 {
///     sim.apply_force(Vec3::new(0.0, -9.81, 0.0));
///     sim.time_step(0.001);
/// }
/// assert_eq!(sim.positions()[0], Vec3::new(0.0, 5.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct ClothSimulation<F: Float = f32> {
    particles: ParticleTable<F>,
    constraints: AllocVec<LinkConstraint<F>>,
    config: SolverConfig<F>,
    initial: ParticleTable<F>,
}

impl<F: Float> ClothSimulation<F> {
    /// Build a simulation with the default solver configuration.
    pub fn new(topology: Topology<F>) -> Result<Self, SimulationError> {
        Self::with_config(topology, SolverConfig::default())
    }

    pub fn with_config(topology: Topology<F>, config: SolverConfig<F>) -> Result<Self, SimulationError> {
        config.validate()?;
        let particles = build_particles(&topology, &config)?;
        debug!(
            particles = particles.len(),
            constraints = topology.constraints.len(),
            iterations = config.iterations,
            "cloth simulation configured"
        );
        Ok(ClothSimulation {
            initial: particles.clone(),
            particles,
            constraints: topology.constraints,
            config,
        })
    }

    /// Swap in a new topology.
    ///
    /// The new topology is validated first; on error the current state is
    /// left untouched.
    pub fn replace(&mut self, topology: Topology<F>) -> Result<(), SimulationError> {
        let particles = build_particles(&topology, &self.config)?;
        debug!(
            particles = particles.len(),
            constraints = topology.constraints.len(),
            "cloth simulation replaced"
        );
        self.initial = particles.clone();
        self.particles = particles;
        self.constraints = topology.constraints;
        Ok(())
    }

    /// Return to the state the current topology was configured with.
    pub fn reset(&mut self) {
        self.particles = self.initial.clone();
        trace!("cloth simulation reset");
    }

    /// Add `force` to every particle's accumulator.
    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.particles.apply_force(force);
    }

    /// Advance the simulation by one step of `step_size`.
    pub fn time_step(&mut self, step_size: F) {
        self.step_with(step_size, &mut NoOpStepObserver);
    }

    /// [`time_step`](Self::time_step), reporting each stage to `observer`.
    ///
    /// A NaN or infinite `step_size` is logged and the step is skipped:
    /// positions and pending forces are left as they were.
    pub fn step_with<O: StepObserver>(&mut self, step_size: F, observer: &mut O) {
        if !step_size.is_finite() {
            warn!(?step_size, "non-finite step size, skipping time step");
            return;
        }

        self.accumulate_forces(step_size);
        observer.on_forces_accumulated();

        self.verlet(step_size);
        observer.on_integrate();

        self.relax(observer);

        observer.on_step_complete();
        trace!(?step_size, "time step complete");
    }

    /// Fold pending forces into movable positions and clear the accumulators.
    pub fn accumulate_forces(&mut self, step_size: F) {
        self.particles.accumulate_forces(step_size);
    }

    /// Verlet-integrate every movable particle.
    pub fn verlet(&mut self, step_size: F) {
        self.particles.integrate(step_size, self.config.mass);
    }

    /// Run the configured number of relaxation passes with ground clamping.
    pub fn satisfy_constraints(&mut self) {
        self.relax(&mut NoOpStepObserver);
    }

    fn relax<O: StepObserver>(&mut self, observer: &mut O) {
        let epsilon = self.config.degenerate_epsilon;
        for iteration in 0..self.config.iterations {
            let (positions, movable) = self.particles.positions_and_flags();
            for (index, link) in self.constraints.iter().enumerate() {
                if link.solve(positions, movable, epsilon) == LinkOutcome::Degenerate {
                    trace!(constraint = index, "skipping degenerate link");
                    observer.on_degenerate_link(index);
                }
            }
            self.particles.clamp_to_ground(self.config.ground_height);
            observer.on_constraint_iteration(iteration);
        }
    }

    /// Copy of the current positions.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.positions().to_vec()
    }

    pub fn constraints(&self) -> &[LinkConstraint<F>] {
        &self.constraints
    }

    pub fn particles(&self) -> &ParticleTable<F> {
        &self.particles
    }

    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}

fn build_particles<F: Float>(
    topology: &Topology<F>,
    config: &SolverConfig<F>,
) -> Result<ParticleTable<F>, SimulationError> {
    let particles = ParticleTable::new(topology.positions.clone(), topology.movable.clone())?;
    let count = particles.len();

    for (i, link) in topology.constraints.iter().enumerate() {
        for index in [link.a(), link.b()] {
            if index >= count {
                return Err(SimulationError::ParticleOutOfBounds { index, count });
            }
        }
        if link.a() == link.b() {
            return Err(SimulationError::SelfLink { index: link.a() });
        }
        let rest = link.rest_length();
        if !rest.is_finite() || rest < F::zero() {
            return Err(SimulationError::InvalidRestLength { constraint: i });
        }
    }

    for i in 0..count {
        if !particles.is_movable(i) && particles.position(i).y < config.ground_height {
            return Err(SimulationError::PinnedBelowGround { index: i });
        }
    }

    Ok(particles)
}
