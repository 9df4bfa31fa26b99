//! Simulation input: particle positions, links and pin flags.
//!
//! A [`Topology`] is plain data. It is validated only when handed to
//! [`ClothSimulation`](crate::simulation::ClothSimulation), so it can be
//! assembled freely.

use crate::constraint::LinkConstraint;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Configuration for a rectangular sheet of particles.
#[derive(Clone, Debug)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    /// Link diagonal neighbours (rest = spacing * sqrt(2)).
    pub shear: bool,
    /// Link skip-one neighbours (rest = spacing * 2).
    pub bend: bool,
}

impl<F: Float> GridConfig<F> {
    /// Structural links only.
    pub fn new(cols: usize, rows: usize, spacing: F) -> Self {
        GridConfig { cols, rows, spacing, shear: false, bend: false }
    }

    pub fn with_shear(mut self) -> Self {
        self.shear = true;
        self
    }

    pub fn with_bend(mut self) -> Self {
        self.bend = true;
        self
    }
}

/// Initial particle positions, ordered links and optional movable flags.
///
/// `movable: None` means every particle is movable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology<F: Float> {
    pub positions: AllocVec<Vec3<F>>,
    pub constraints: AllocVec<LinkConstraint<F>>,
    pub movable: Option<AllocVec<bool>>,
}

impl<F: Float> Topology<F> {
    pub fn new(positions: AllocVec<Vec3<F>>) -> Self {
        Topology { positions, constraints: AllocVec::new(), movable: None }
    }

    pub fn with_constraints(mut self, constraints: AllocVec<LinkConstraint<F>>) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_movable(mut self, movable: AllocVec<bool>) -> Self {
        self.movable = Some(movable);
        self
    }

    /// Link `a` and `b` at their current distance.
    ///
    /// Panics if either index is out of range.
    pub fn link(&mut self, a: usize, b: usize) -> &mut Self {
        self.constraints.push(LinkConstraint::from_positions(a, b, &self.positions));
        self
    }

    pub fn link_with_length(&mut self, a: usize, b: usize, rest_length: F) -> &mut Self {
        self.constraints.push(LinkConstraint::new(a, b, rest_length));
        self
    }

    /// Mark particle `index` as pinned.
    ///
    /// Flags set through [`with_movable`](Self::with_movable) are resized to
    /// the particle count first, new slots movable. Panics if `index` is not
    /// a valid particle index.
    pub fn pin(&mut self, index: usize) -> &mut Self {
        let count = self.positions.len();
        assert!(index < count, "particle index {} out of bounds (count: {})", index, count);
        let flags = self.movable.get_or_insert_with(|| vec![true; count]);
        flags.resize(count, true);
        flags[index] = false;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// A rope from `start` to `end` with `segments` equal links.
    pub fn chain(start: Vec3<F>, end: Vec3<F>, segments: usize) -> Self {
        let segments = segments.max(1);
        let mut positions = AllocVec::with_capacity(segments + 1);
        let mut constraints = AllocVec::with_capacity(segments);

        let segment_length = start.distance(end) / F::from_usize(segments);

        for i in 0..=segments {
            let t = F::from_usize(i) / F::from_usize(segments);
            positions.push(start.lerp(end, t));
        }

        for i in 0..segments {
            constraints.push(LinkConstraint::new(i, i + 1, segment_length));
        }

        Topology { positions, constraints, movable: None }
    }

    /// A hanging sheet whose top-left corner is `origin`.
    ///
    /// Columns run along +x and rows along -y. Particle at (col, row) has
    /// index `row * cols + col`.
    pub fn grid(origin: Vec3<F>, config: &GridConfig<F>) -> Self {
        let cols = config.cols.max(1);
        let rows = config.rows.max(1);
        let spacing = config.spacing;
        let mut positions = AllocVec::with_capacity(cols * rows);
        let mut constraints = AllocVec::new();

        for row in 0..rows {
            for col in 0..cols {
                let x = origin.x + F::from_usize(col) * spacing;
                let y = origin.y - F::from_usize(row) * spacing;
                positions.push(Vec3::new(x, y, origin.z));
            }
        }

        let diag_length = (spacing * spacing + spacing * spacing).sqrt();
        let bend_length = spacing + spacing;

        // Structural: horizontal
        for row in 0..rows {
            for col in 0..(cols - 1) {
                let a = row * cols + col;
                constraints.push(LinkConstraint::new(a, a + 1, spacing));
            }
        }

        // Structural: vertical
        for row in 0..(rows - 1) {
            for col in 0..cols {
                let a = row * cols + col;
                constraints.push(LinkConstraint::new(a, a + cols, spacing));
            }
        }

        if config.shear {
            for row in 0..(rows - 1) {
                for col in 0..(cols - 1) {
                    let tl = row * cols + col;
                    let tr = tl + 1;
                    let bl = tl + cols;
                    let br = bl + 1;
                    constraints.push(LinkConstraint::new(tl, br, diag_length));
                    constraints.push(LinkConstraint::new(tr, bl, diag_length));
                }
            }
        }

        if config.bend {
            for row in 0..rows {
                for col in 0..(cols.saturating_sub(2)) {
                    let a = row * cols + col;
                    constraints.push(LinkConstraint::new(a, a + 2, bend_length));
                }
            }
            for row in 0..(rows.saturating_sub(2)) {
                for col in 0..cols {
                    let a = row * cols + col;
                    constraints.push(LinkConstraint::new(a, a + 2 * cols, bend_length));
                }
            }
        }

        Topology { positions, constraints, movable: None }
    }
}
