//! One-time construction of the cloth's particles and constraints.

use crate::config::ClothConfig;
use crate::constraint::{ConstraintKind, DistanceConstraint};
use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Particles and constraints of a freshly built grid.
pub struct GridTopology<F: Float> {
    pub particles: AllocVec<Particle<F>>,
    pub constraints: AllocVec<DistanceConstraint<F>>,
}

/// Flat index of the particle at `(row, col)`.
#[inline]
pub fn grid_index(cols: usize, row: usize, col: usize) -> usize {
    row * cols + col
}

/// Number of structural + shear constraints in a `rows` x `cols` grid.
pub fn structural_shear_count(rows: usize, cols: usize) -> usize {
    let r1 = rows.saturating_sub(1);
    let c1 = cols.saturating_sub(1);
    r1 * cols + rows * c1 + 2 * r1 * c1
}

/// Number of bend constraints in a `rows` x `cols` grid.
pub fn bend_count(rows: usize, cols: usize) -> usize {
    let r2 = rows.saturating_sub(2);
    let c2 = cols.saturating_sub(2);
    r2 * cols + rows * c2 + 2 * r2 * c2
}

/// Lay out the grid and link it.
///
/// The grid lies in the horizontal XZ plane, centered on the anchor:
/// columns run along +X and rows along -Z. Row 0 is pinned. Rest lengths
/// are measured from these initial positions, so bend links come out at
/// twice the spacing and diagonals at `spacing * sqrt(2)`.
///
/// Fails with the config's first validation error.
pub fn build<F: Float>(config: &ClothConfig<F>) -> Result<GridTopology<F>, ClothError> {
    config.validate()?;
    let rows = config.rows;
    let cols = config.cols;
    let spacing = config.rest_distance;

    let start = Vec3::new(
        -F::from_usize(cols - 1) * spacing * F::half(),
        F::zero(),
        F::from_usize(rows - 1) * spacing * F::half(),
    );

    let mut particles = AllocVec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let offset = Vec3::new(
                F::from_usize(col) * spacing,
                F::zero(),
                -F::from_usize(row) * spacing,
            );
            let pos = config.anchor + start + offset;
            let particle = if row == 0 {
                Particle::pinned(pos, config.particle_mass, config.damping)
            } else {
                Particle::new(pos, config.particle_mass, config.damping)
            };
            particles.push(particle);
        }
    }

    let mut constraints =
        AllocVec::with_capacity(structural_shear_count(rows, cols) + bend_count(rows, cols));
    let idx = |row: usize, col: usize| grid_index(cols, row, col);
    let mut link = |a: usize, b: usize, kind: ConstraintKind| {
        constraints.push(DistanceConstraint::from_particles(a, b, &particles, kind));
    };

    // Structural + shear, one cell at a time.
    for row in 0..rows {
        for col in 0..cols {
            let right = col + 1 < cols;
            let below = row + 1 < rows;
            if right {
                link(idx(row, col), idx(row, col + 1), ConstraintKind::Structural);
            }
            if below {
                link(idx(row, col), idx(row + 1, col), ConstraintKind::Structural);
            }
            if right && below {
                link(idx(row, col), idx(row + 1, col + 1), ConstraintKind::Shear);
                link(idx(row, col + 1), idx(row + 1, col), ConstraintKind::Shear);
            }
        }
    }

    // Bend: the same pattern at two-cell range.
    for row in 0..rows {
        for col in 0..cols {
            let right = col + 2 < cols;
            let below = row + 2 < rows;
            if below {
                link(idx(row, col), idx(row + 2, col), ConstraintKind::Bend);
            }
            if right {
                link(idx(row, col), idx(row, col + 2), ConstraintKind::Bend);
            }
            if right && below {
                link(idx(row, col), idx(row + 2, col + 2), ConstraintKind::Bend);
                link(idx(row, col + 2), idx(row + 2, col), ConstraintKind::Bend);
            }
        }
    }

    Ok(GridTopology { particles, constraints })
}
