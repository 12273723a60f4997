//! Aerodynamic forcing on cloth triangles.

use crate::float::Float;
use crate::particle::Particle;
use crate::topology::grid_index;
use crate::vec::{Vec, Vec3};

/// Force-per-mass that `wind` exerts on a triangle with corners `p0, p1, p2`.
///
/// Only the component of the wind along the face normal pushes the
/// cloth; wind sliding along the face does nothing. A degenerate
/// (zero-area) triangle has no normal and receives no force.
pub fn triangle_force<F: Float>(p0: Vec3<F>, p1: Vec3<F>, p2: Vec3<F>, wind: Vec3<F>) -> Vec3<F> {
    match (p2 - p0).cross(p1 - p0).try_normalize() {
        Some(normal) => normal.scale(normal.dot(wind)),
        None => Vec3::zero(),
    }
}

/// Apply wind to triangle `[i0, i1, i2]`, adding the same force-per-mass
/// to all three corners.
pub fn apply_to_triangle<F: Float>(particles: &mut [Particle<F>], tri: [usize; 3], wind: Vec3<F>) {
    let [i0, i1, i2] = tri;
    let force = triangle_force(particles[i0].pos, particles[i1].pos, particles[i2].pos, wind);
    particles[i0].add_force(force);
    particles[i1].add_force(force);
    particles[i2].add_force(force);
}

/// The two triangles covering the quad whose top-left corner is `(row, col)`.
///
/// Same split and winding as the rendered surface: `(tl, tr, br)` then
/// `(br, bl, tl)`.
pub fn quad_triangles(cols: usize, row: usize, col: usize) -> [[usize; 3]; 2] {
    let tl = grid_index(cols, row, col);
    let tr = grid_index(cols, row, col + 1);
    let bl = grid_index(cols, row + 1, col);
    let br = grid_index(cols, row + 1, col + 1);
    [[tl, tr, br], [br, bl, tl]]
}

/// Apply `wind` (already scaled by the step duration) to every quad of a
/// `rows` x `cols` grid.
pub fn apply_to_grid<F: Float>(particles: &mut [Particle<F>], rows: usize, cols: usize, wind: Vec3<F>) {
    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols.saturating_sub(1) {
            for tri in quad_triangles(cols, row, col) {
                apply_to_triangle(particles, tri, wind);
            }
        }
    }
}
