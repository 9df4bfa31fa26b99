//! Distance links between particle pairs.

use crate::float::Float;
use crate::vec::Vec3;

/// Outcome of relaxing one link once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// At least one endpoint was moved toward the rest length.
    Corrected,
    /// Both endpoints are pinned; the link stays as it is.
    Pinned,
    /// The endpoints are (nearly) coincident so no direction exists.
    Degenerate,
}

/// A rigid distance link between particles `a` and `b`.
///
/// Links are immutable once created. Index validity is checked when the
/// link is handed to a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConstraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
}

impl<F: Float> LinkConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        LinkConstraint { a, b, rest_length }
    }

    /// Link two particles at their current distance.
    pub fn from_positions(a: usize, b: usize, positions: &[Vec3<F>]) -> Self {
        let rest_length = positions[a].distance(positions[b]);
        LinkConstraint { a, b, rest_length }
    }

    pub fn a(&self) -> usize { self.a }
    pub fn b(&self) -> usize { self.b }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Move the endpoints toward the rest length.
    ///
    /// Two movable endpoints split the correction evenly; a single movable
    /// endpoint absorbs all of it. Links shorter than `epsilon` are skipped.
    pub fn solve(&self, positions: &mut [Vec3<F>], movable: &[bool], epsilon: F) -> LinkOutcome {
        let a_movable = movable[self.a];
        let b_movable = movable[self.b];
        if !a_movable && !b_movable {
            return LinkOutcome::Pinned;
        }

        let delta = positions[self.b] - positions[self.a];
        let delta_length = delta.length();
        if delta_length.is_near_zero(epsilon) {
            return LinkOutcome::Degenerate;
        }
        let diff = (delta_length - self.rest_length) / delta_length;

        if a_movable && b_movable {
            let correction = delta.scale(F::half() * diff);
            positions[self.a] += correction;
            positions[self.b] -= correction;
        } else if a_movable {
            positions[self.a] += delta.scale(diff);
        } else {
            positions[self.b] -= delta.scale(diff);
        }
        LinkOutcome::Corrected
    }
}
