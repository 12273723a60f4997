//! Render-ready buffers extracted from a cloth.
//!
//! Topology (UVs and triangle indices) is fixed by the grid size and is
//! computed once; only vertices and normals are rewritten on refresh.

use crate::cloth::Cloth;
use crate::error::ClothError;
use crate::float::Float;
use crate::topology::grid_index;
use crate::vec::{Vec, Vec2, Vec3};
use crate::wind::quad_triangles;
use alloc::vec::Vec as AllocVec;

/// Coordinate space for emitted vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Space {
    /// Positions exactly as simulated.
    #[default]
    World,
    /// Positions minus the cloth anchor, for meshes parented to it.
    Anchor,
}

/// Vertex, normal, UV, and index buffers for a cloth grid.
///
/// Vertices are row-major, matching the particle order.
#[derive(Clone, Debug)]
pub struct SurfaceMesh<F: Float> {
    pub vertices: AllocVec<Vec3<F>>,
    pub normals: AllocVec<Vec3<F>>,
    pub uvs: AllocVec<Vec2<F>>,
    pub indices: AllocVec<u32>,
    rows: usize,
    cols: usize,
}

impl<F: Float> SurfaceMesh<F> {
    /// Allocate buffers for a `rows` x `cols` grid. Vertices and normals
    /// stay zero until the first [`refresh`](Self::refresh).
    ///
    /// Indices are `u32`, so grids with more than `u32::MAX` vertices are
    /// rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ClothError> {
        let count = rows
            .checked_mul(cols)
            .filter(|&n| u32::try_from(n).is_ok())
            .ok_or(ClothError::SurfaceTooLarge { rows, cols })?;
        let mut uvs = AllocVec::with_capacity(count);
        for row in 0..rows {
            for col in 0..cols {
                uvs.push(Vec2::new(
                    F::from_usize(col) / F::from_usize(cols),
                    F::from_usize(row) / F::from_usize(rows),
                ));
            }
        }

        let quads = rows.saturating_sub(1) * cols.saturating_sub(1);
        let mut indices = AllocVec::with_capacity(quads * 6);
        for row in 0..rows.saturating_sub(1) {
            for col in 0..cols.saturating_sub(1) {
                for tri in quad_triangles(cols, row, col) {
                    indices.extend(tri.iter().map(|&i| i as u32)); // bounded by `count`
                }
            }
        }

        Ok(SurfaceMesh {
            vertices: alloc::vec![Vec3::zero(); count],
            normals: alloc::vec![Vec3::zero(); count],
            uvs,
            indices,
            rows,
            cols,
        })
    }

    /// Build buffers for `cloth` and fill them with its current state.
    pub fn from_cloth(cloth: &Cloth<F>, space: Space) -> Result<Self, ClothError> {
        let mut mesh = SurfaceMesh::new(cloth.rows(), cloth.cols())?;
        mesh.write_vertices(cloth, space);
        mesh.recompute_normals();
        Ok(mesh)
    }

    /// Overwrite vertices and normals from `cloth`, reusing allocations.
    pub fn refresh(&mut self, cloth: &Cloth<F>, space: Space) -> Result<(), ClothError> {
        if cloth.rows() != self.rows || cloth.cols() != self.cols {
            return Err(ClothError::SurfaceMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: cloth.rows(),
                cols: cloth.cols(),
            });
        }
        self.write_vertices(cloth, space);
        self.recompute_normals();
        Ok(())
    }

    fn write_vertices(&mut self, cloth: &Cloth<F>, space: Space) {
        let origin = match space {
            Space::World => Vec3::zero(),
            Space::Anchor => cloth.anchor(),
        };
        for (v, p) in self.vertices.iter_mut().zip(cloth.particles()) {
            *v = p.pos - origin;
        }
    }

    /// Area-weighted vertex normals from the current vertices.
    fn recompute_normals(&mut self) {
        for n in self.normals.iter_mut() {
            *n = Vec3::zero();
        }
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (self.vertices[b] - self.vertices[a]).cross(self.vertices[c] - self.vertices[a]);
            self.normals[a] = self.normals[a] + face;
            self.normals[b] = self.normals[b] + face;
            self.normals[c] = self.normals[c] + face;
        }
        for n in self.normals.iter_mut() {
            *n = n.normalize();
        }
    }

    pub fn vertex(&self, row: usize, col: usize) -> Vec3<F> {
        self.vertices[grid_index(self.cols, row, col)]
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
}
