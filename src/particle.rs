//! Structure-of-arrays particle storage and the per-particle step stages.

use crate::error::SimulationError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Particle state stored as four parallel arrays indexed by particle id.
///
/// The arrays are private so their lengths can only change together.
/// Particles start at rest: the previous position equals the initial
/// position and the force accumulator is zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTable<F: Float> {
    positions: AllocVec<Vec3<F>>,
    previous_positions: AllocVec<Vec3<F>>,
    forces: AllocVec<Vec3<F>>,
    movable: AllocVec<bool>,
}

impl<F: Float> ParticleTable<F> {
    /// Build a table from initial positions and optional movable flags.
    ///
    /// `None` marks every particle movable.
    pub fn new(
        positions: AllocVec<Vec3<F>>,
        movable: Option<AllocVec<bool>>,
    ) -> Result<Self, SimulationError> {
        let count = positions.len();
        let movable = match movable {
            Some(flags) if flags.len() != count => {
                return Err(SimulationError::MovableCountMismatch {
                    expected: count,
                    found: flags.len(),
                });
            }
            Some(flags) => flags,
            None => vec![true; count],
        };
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(SimulationError::NonFinitePosition { index });
        }

        Ok(ParticleTable {
            previous_positions: positions.clone(),
            forces: vec![Vec3::zero(); count],
            positions,
            movable,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Vec3<F> {
        self.positions[index]
    }

    pub fn previous_position(&self, index: usize) -> Vec3<F> {
        self.previous_positions[index]
    }

    pub fn force(&self, index: usize) -> Vec3<F> {
        self.forces[index]
    }

    pub fn is_movable(&self, index: usize) -> bool {
        self.movable[index]
    }

    pub fn positions(&self) -> &[Vec3<F>] {
        &self.positions
    }

    pub fn previous_positions(&self) -> &[Vec3<F>] {
        &self.previous_positions
    }

    pub fn forces(&self) -> &[Vec3<F>] {
        &self.forces
    }

    pub fn movable(&self) -> &[bool] {
        &self.movable
    }

    /// Add `force` to every accumulator, pinned particles included.
    pub fn apply_force(&mut self, force: Vec3<F>) {
        for f in self.forces.iter_mut() {
            *f += force;
        }
    }

    /// Nudge movable particles by `force * dt`, then clear every accumulator.
    ///
    /// Pinned particles are cleared too so their accumulators never grow
    /// without bound; their positions are left alone.
    pub fn accumulate_forces(&mut self, dt: F) {
        for i in 0..self.positions.len() {
            if self.movable[i] {
                self.positions[i] += self.forces[i].scale(dt);
            }
            self.forces[i] = Vec3::zero();
        }
    }

    /// Position Verlet: `x' = 2x - x_prev + f * dt^2 / mass` for movable particles.
    pub fn integrate(&mut self, dt: F, mass: F) {
        let accel_scale = dt * dt / mass;
        for i in 0..self.positions.len() {
            if !self.movable[i] {
                continue;
            }
            let pos = self.positions[i];
            let new_pos = pos + pos - self.previous_positions[i] + self.forces[i].scale(accel_scale);
            self.previous_positions[i] = pos;
            self.positions[i] = new_pos;
        }
    }

    /// Lift every movable particle below `height` back onto the plane.
    ///
    /// Only the current position moves; the previous position keeps whatever
    /// downward motion the particle had, so the contact is non-elastic.
    pub fn clamp_to_ground(&mut self, height: F) {
        for (pos, &movable) in self.positions.iter_mut().zip(self.movable.iter()) {
            if movable {
                pos.y = pos.y.max(height);
            }
        }
    }

    /// Mutable positions alongside the movable flags, for constraint solving.
    pub(crate) fn positions_and_flags(&mut self) -> (&mut [Vec3<F>], &[bool]) {
        (&mut self.positions, &self.movable)
    }
}
